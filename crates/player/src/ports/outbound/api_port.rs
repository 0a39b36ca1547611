//! ApiPort - Object-safe HTTP boundary
//!
//! The UI/composition root needs an object-safe abstraction that can be
//! stored behind `Arc<dyn ...>`. Application services take this port and
//! provide the typed request/response layer on top.

use serde_json::Value;
use thiserror::Error;

/// Errors from HTTP calls through an [`ApiPort`].
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// Multipart POST with a single image part. Used for the avatar
    /// photo upload.
    async fn post_image(
        &self,
        path: &str,
        field: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ApiError>;
}
