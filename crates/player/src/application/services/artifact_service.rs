//! Artifact service - records backing the 3D reconstruction page.

use std::sync::Arc;

use sbiba_shared::ArtifactRecord;

use crate::ports::outbound::{ApiError, ApiPort};

pub struct ArtifactService {
    api: Arc<dyn ApiPort>,
}

impl ArtifactService {
    pub fn new(api: Arc<dyn ApiPort>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<ArtifactRecord>, ApiError> {
        let value = self.api.get_json("/objects/get-all-data").await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
