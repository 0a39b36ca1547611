//! Coloration service - before/after gallery records.

use std::sync::Arc;

use sbiba_shared::ColorationRecord;

use crate::ports::outbound::{ApiError, ApiPort};

pub struct ColorationService {
    api: Arc<dyn ApiPort>,
}

impl ColorationService {
    pub fn new(api: Arc<dyn ApiPort>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<ColorationRecord>, ApiError> {
        let value = self.api.get_json("/coloration/get-all-data").await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
