//! CameraPort - device camera boundary
//!
//! The camera stream is exclusively owned by one capture flow at a time:
//! `acquire` before showing a preview, `release` on every exit path
//! (including cancel and permission denial). Implementations are not
//! `Send` - the browser media stream is thread-bound - so the port is
//! held as `Rc<dyn CameraPort>` inside the single-threaded UI runtime.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CameraError {
    #[error("camera unavailable: {0}")]
    Unavailable(String),

    #[error("no active camera stream")]
    NotActive,

    #[error("frame capture failed: {0}")]
    Capture(String),
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait CameraPort {
    /// Request the device camera (rear-facing preferred, 1280x720 ideal).
    async fn acquire(&self) -> Result<(), CameraError>;

    /// Wire the active stream into the `<video>` element with the given id.
    fn attach_preview(&self, video_element_id: &str) -> Result<(), CameraError>;

    /// Grab the current preview frame as JPEG bytes.
    fn capture_jpeg(&self, video_element_id: &str) -> Result<Vec<u8>, CameraError>;

    /// Stop all tracks and drop the stream. Idempotent.
    fn release(&self);

    /// Whether a stream is currently held.
    fn is_active(&self) -> bool;
}
