//! Device camera adapters.
//!
//! The browser adapter wraps `getUserMedia`; the native build ships a
//! stub that fails acquisition, which the UI surfaces the same way as a
//! denied browser permission.

use std::rc::Rc;

use crate::ports::outbound::CameraPort;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod stub;

#[cfg(target_arch = "wasm32")]
pub use wasm::MediaDevicesCamera;

#[cfg(not(target_arch = "wasm32"))]
pub use stub::StubCamera;

/// Create the platform camera adapter.
///
/// Returns `Rc` rather than `Arc`: the browser media stream is
/// thread-bound, and the UI runtime is single-threaded.
pub fn create_camera() -> Rc<dyn CameraPort> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(MediaDevicesCamera::new())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(StubCamera)
    }
}
