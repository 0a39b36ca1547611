//! Native camera stub.
//!
//! Desktop builds have no camera pipeline; acquisition fails with a
//! clear error and the capture flow falls back to its initial state.

use crate::ports::outbound::{CameraError, CameraPort};

pub struct StubCamera;

#[async_trait::async_trait]
impl CameraPort for StubCamera {
    async fn acquire(&self) -> Result<(), CameraError> {
        Err(CameraError::Unavailable(
            "camera capture is only available in the browser build".to_string(),
        ))
    }

    fn attach_preview(&self, _video_element_id: &str) -> Result<(), CameraError> {
        Err(CameraError::NotActive)
    }

    fn capture_jpeg(&self, _video_element_id: &str) -> Result<Vec<u8>, CameraError> {
        Err(CameraError::NotActive)
    }

    fn release(&self) {}

    fn is_active(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_camera_never_acquires() {
        let camera = StubCamera;
        assert!(camera.acquire().await.is_err());
        assert!(!camera.is_active());
        assert!(camera.capture_jpeg("preview").is_err());
    }
}
