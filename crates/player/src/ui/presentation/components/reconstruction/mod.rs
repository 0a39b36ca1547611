mod glb_viewer;
mod reconstruction_modal;

pub use glb_viewer::{GlbViewer, MODEL_VIEWER_SCRIPT_SRC};
pub use reconstruction_modal::ReconstructionModal;
