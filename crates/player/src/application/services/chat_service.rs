//! Chat service - talks to the heritage backend's assistant endpoints.

use std::sync::Arc;

use sbiba_shared::{ChatAnswer, ChatRequest, SourceIdResponse};
use serde_json::Value;

use crate::ports::outbound::{ApiError, ApiPort};

pub struct ChatService {
    api: Arc<dyn ApiPort>,
}

impl ChatService {
    pub fn new(api: Arc<dyn ApiPort>) -> Self {
        Self { api }
    }

    /// Fetch the knowledge-source id the backend expects on every
    /// question. Called once when the chat page mounts.
    pub async fn fetch_source_id(&self) -> Result<String, ApiError> {
        let value = self.api.get_json("/get-source-id").await?;
        let response: SourceIdResponse = decode(value)?;
        Ok(response.source_id)
    }

    /// Ask the assistant a question and return its answer text.
    pub async fn ask(&self, source_id: &str, question: &str) -> Result<String, ApiError> {
        let request = ChatRequest {
            source_id: source_id.to_string(),
            question: question.to_string(),
        };
        let body = serde_json::to_value(&request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let value = self.api.post_json("/chat", &body).await?;
        let answer: ChatAnswer = decode(value)?;
        Ok(answer.answer)
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
