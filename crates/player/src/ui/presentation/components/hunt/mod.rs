mod camera_modal;
mod discovery_path;
mod element_details;

pub use camera_modal::CameraModal;
pub use discovery_path::DiscoveryPath;
pub use element_details::ElementDetailsPanel;
