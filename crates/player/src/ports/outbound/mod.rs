//! Outbound ports - interfaces the player calls into.

pub mod api_port;
pub mod camera_port;
pub mod platform;
pub mod platform_port;

pub use api_port::{ApiError, ApiPort};
pub use camera_port::{CameraError, CameraPort};
pub use platform::{
    DocumentProvider, LogProvider, RandomProvider, SleepProvider, TimeProvider,
};
pub use platform_port::PlatformPort;
