//! Avatar service - drives the three-step avatar generation flow.
//!
//! Calls go through the gateway's reverse proxy (`/api/artguru?path=...`)
//! so the upstream tokens stay server-side. Flow: upload the captured
//! photo, request generation, then poll the task queue until the avatar
//! image is ready.

use std::sync::Arc;

use sbiba_shared::{
    ArtguruEnvelope, AsyncTaskQueue, GenerateData, GenerateRequest, QueueTaskRequest,
    QueueTaskStatus, UploadData, QUEUE_STATUS_FAILED, QUEUE_STATUS_SUCCESS,
};
use serde_json::Value;
use thiserror::Error;

use crate::ports::outbound::{ApiError, ApiPort, PlatformPort};

/// Queue polling: 30 attempts, one every 2 seconds.
pub const POLL_ATTEMPTS: u32 = 30;
pub const POLL_INTERVAL_MS: u64 = 2000;

const UPLOAD_PATH: &str = "/api/artguru?path=upload";
const GENERATE_PATH: &str = "/api/artguru?path=generate-or-queue";
const QUEUE_PATH: &str = "/api/artguru?path=get-queue-task";

#[derive(Debug, Clone, Error)]
pub enum AvatarError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("generation rejected: {0}")]
    Rejected(String),

    #[error("generation timed out")]
    Timeout,
}

pub struct AvatarService {
    gateway: Arc<dyn ApiPort>,
    platform: Arc<dyn PlatformPort>,
}

impl AvatarService {
    pub fn new(gateway: Arc<dyn ApiPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { gateway, platform }
    }

    /// Upload the captured photo; returns the hosted image URL.
    pub async fn upload(&self, jpeg: Vec<u8>) -> Result<String, AvatarError> {
        let value = self
            .gateway
            .post_image(UPLOAD_PATH, "image", "capture.jpg", jpeg)
            .await?;
        let envelope: ArtguruEnvelope<UploadData> = decode(value)?;
        let data = accept(envelope)?;
        Ok(data.image_url)
    }

    /// Request avatar generation for an uploaded photo; returns the
    /// queue task id to poll.
    pub async fn generate(&self, image_url: &str) -> Result<String, AvatarError> {
        let request = GenerateRequest::game_avatar(image_url);
        let body = to_body(&request)?;
        let value = self.gateway.post_json(GENERATE_PATH, &body).await?;
        let envelope: ArtguruEnvelope<GenerateData> = decode(value)?;
        let GenerateData {
            async_task_queue: AsyncTaskQueue { async_task_id },
        } = accept(envelope)?;
        Ok(async_task_id)
    }

    /// Poll the queue until the task finishes. SUCCESS yields the
    /// generated image URL; FAILED or exhaustion is an error.
    pub async fn poll(&self, task_id: &str) -> Result<String, AvatarError> {
        let request = QueueTaskRequest {
            async_task_ids: vec![task_id.to_string()],
        };
        let body = to_body(&request)?;

        for _ in 0..POLL_ATTEMPTS {
            self.platform.sleep_ms(POLL_INTERVAL_MS).await;

            let value = self.gateway.post_json(QUEUE_PATH, &body).await?;
            let envelope: ArtguruEnvelope<Vec<QueueTaskStatus>> = decode(value)?;
            let statuses = accept(envelope)?;
            let Some(status) = statuses.into_iter().next() else {
                continue;
            };

            match status.queue_status.as_str() {
                QUEUE_STATUS_SUCCESS => {
                    return status
                        .generate_image
                        .ok_or_else(|| AvatarError::Rejected("empty result".to_string()));
                }
                QUEUE_STATUS_FAILED => {
                    let reason = status.message.unwrap_or_else(|| "unknown".to_string());
                    return Err(AvatarError::Rejected(reason));
                }
                _ => {}
            }
        }

        Err(AvatarError::Timeout)
    }

    /// Full flow: upload, generate, poll.
    pub async fn create_from_photo(&self, jpeg: Vec<u8>) -> Result<String, AvatarError> {
        let image_url = self.upload(jpeg).await?;
        self.platform
            .log_debug(&format!("avatar photo uploaded: {image_url}"));
        let task_id = self.generate(&image_url).await?;
        self.poll(&task_id).await
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, AvatarError> {
    serde_json::from_value(value).map_err(|e| AvatarError::Api(ApiError::Decode(e.to_string())))
}

fn to_body<T: serde::Serialize>(request: &T) -> Result<Value, AvatarError> {
    serde_json::to_value(request).map_err(|e| AvatarError::Api(ApiError::Decode(e.to_string())))
}

/// Unwrap an upstream envelope, turning non-zero codes into errors.
fn accept<T>(envelope: ArtguruEnvelope<T>) -> Result<T, AvatarError> {
    if !envelope.is_ok() {
        let reason = envelope
            .message
            .unwrap_or_else(|| format!("code {}", envelope.code));
        return Err(AvatarError::Rejected(reason));
    }
    envelope
        .data
        .ok_or_else(|| AvatarError::Rejected("empty response".to_string()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// ApiPort returning scripted JSON values in order.
    struct ScriptedApi {
        responses: Mutex<Vec<Value>>,
    }

    impl ScriptedApi {
        fn new(responses: Vec<Value>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
            })
        }

        fn next(&self) -> Result<Value, ApiError> {
            self.responses
                .lock()
                .map_err(|_| ApiError::Network("poisoned".to_string()))?
                .pop()
                .ok_or_else(|| ApiError::Network("script exhausted".to_string()))
        }
    }

    #[async_trait::async_trait]
    impl ApiPort for ScriptedApi {
        async fn get_json(&self, _path: &str) -> Result<Value, ApiError> {
            self.next()
        }
        async fn post_json(&self, _path: &str, _body: &Value) -> Result<Value, ApiError> {
            self.next()
        }
        async fn post_image(
            &self,
            _path: &str,
            _field: &str,
            _filename: &str,
            _bytes: Vec<u8>,
        ) -> Result<Value, ApiError> {
            self.next()
        }
    }

    fn platform() -> Arc<dyn PlatformPort> {
        // Desktop providers; tokio sleeps of 2s per poll are fine for the
        // single-iteration tests below, which never reach a sleep twice.
        Arc::new(crate::infrastructure::platform::create_platform())
    }

    fn service(responses: Vec<Value>) -> AvatarService {
        AvatarService::new(ScriptedApi::new(responses), platform())
    }

    #[tokio::test]
    async fn test_upload_returns_image_url() {
        let service = service(vec![json!({
            "code": 0,
            "data": { "imageUrl": "https://cdn.example/photo.jpg" }
        })]);
        let url = service.upload(vec![1, 2, 3]).await.expect("upload");
        assert_eq!(url, "https://cdn.example/photo.jpg");
    }

    #[tokio::test]
    async fn test_upload_rejects_nonzero_code() {
        let service = service(vec![json!({
            "code": 42,
            "message": "bad image"
        })]);
        let err = service.upload(vec![1]).await.expect_err("rejected");
        assert!(matches!(err, AvatarError::Rejected(reason) if reason == "bad image"));
    }

    #[tokio::test]
    async fn test_generate_returns_task_id() {
        let service = service(vec![json!({
            "code": 0,
            "data": { "asyncTaskQueueVO": { "asyncTaskId": "task-7" } }
        })]);
        let task_id = service.generate("https://cdn.example/photo.jpg").await.expect("generate");
        assert_eq!(task_id, "task-7");
    }

    #[tokio::test]
    async fn test_poll_returns_image_on_success() {
        let service = service(vec![json!({
            "code": 0,
            "data": [{ "queueStatus": "SUCCESS", "generateImage": "https://cdn.example/avatar.png" }]
        })]);
        let image = service.poll("task-7").await.expect("poll");
        assert_eq!(image, "https://cdn.example/avatar.png");
    }

    #[tokio::test]
    async fn test_poll_surfaces_failed_status() {
        let service = service(vec![json!({
            "code": 0,
            "data": [{ "queueStatus": "FAILED", "message": "nsfw" }]
        })]);
        let err = service.poll("task-7").await.expect_err("failed");
        assert!(matches!(err, AvatarError::Rejected(reason) if reason == "nsfw"));
    }
}
