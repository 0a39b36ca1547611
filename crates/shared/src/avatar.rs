//! Wire format of the third-party avatar-generation API.
//!
//! Every response is wrapped in an envelope with a numeric `code`
//! (0 = success) and an optional `message`. The generation call is
//! asynchronous: it enqueues a task whose status is polled until it
//! reports `SUCCESS` or `FAILED`.

use serde::{Deserialize, Serialize};

pub const QUEUE_STATUS_SUCCESS: &str = "SUCCESS";
pub const QUEUE_STATUS_FAILED: &str = "FAILED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtguruEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ArtguruEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

/// `POST ?path=upload` response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadData {
    pub image_url: String,
}

/// `POST ?path=generate-or-queue` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub style: String,
    pub aspect_ratio: String,
    pub case_id: Option<String>,
    pub case_type: String,
    pub height: u32,
    pub image: String,
    pub negative_prompt: String,
    pub prompt: String,
    pub width: u32,
}

impl GenerateRequest {
    /// The fixed request the avatar flow sends for a captured photo.
    pub fn game_avatar(image_url: impl Into<String>) -> Self {
        Self {
            style: "default".to_string(),
            aspect_ratio: "square".to_string(),
            case_id: None,
            case_type: "USER".to_string(),
            height: 360,
            image: image_url.into(),
            negative_prompt: String::new(),
            prompt: "Game Avatar".to_string(),
            width: 540,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncTaskQueue {
    pub async_task_id: String,
}

/// `POST ?path=generate-or-queue` response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateData {
    #[serde(rename = "asyncTaskQueueVO")]
    pub async_task_queue: AsyncTaskQueue,
}

/// `POST ?path=get-queue-task` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueTaskRequest {
    pub async_task_ids: Vec<String>,
}

/// One entry of the `get-queue-task` response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueTaskStatus {
    pub queue_status: String,
    #[serde(default)]
    pub generate_image: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl QueueTaskStatus {
    pub fn is_done(&self) -> bool {
        self.queue_status == QUEUE_STATUS_SUCCESS || self.queue_status == QUEUE_STATUS_FAILED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_code_zero_is_ok() {
        let env: ArtguruEnvelope<UploadData> = ArtguruEnvelope {
            code: 0,
            message: None,
            data: Some(UploadData {
                image_url: "https://cdn.example/img.jpg".to_string(),
            }),
        };
        assert!(env.is_ok());
        assert!(!ArtguruEnvelope::<UploadData> {
            code: 401,
            message: Some("expired".to_string()),
            data: None,
        }
        .is_ok());
    }

    #[test]
    fn test_generate_data_reads_task_queue_vo_key() {
        let json = serde_json::json!({
            "asyncTaskQueueVO": { "asyncTaskId": "task-1" }
        });
        let data: GenerateData = serde_json::from_value(json).expect("deserialize");
        assert_eq!(data.async_task_queue.async_task_id, "task-1");
    }

    #[test]
    fn test_generate_request_uses_camel_case() {
        let json =
            serde_json::to_value(GenerateRequest::game_avatar("http://x/y.jpg")).expect("ser");
        assert_eq!(json["aspectRatio"], "square");
        assert_eq!(json["caseType"], "USER");
        assert_eq!(json["negativePrompt"], "");
    }

    #[test]
    fn test_queue_status_done_states() {
        let pending = QueueTaskStatus {
            queue_status: "RUNNING".to_string(),
            generate_image: None,
            message: None,
        };
        assert!(!pending.is_done());
        let done = QueueTaskStatus {
            queue_status: QUEUE_STATUS_SUCCESS.to_string(),
            generate_image: Some("url".to_string()),
            message: None,
        };
        assert!(done.is_done());
    }
}
