mod generation_modal;

pub use generation_modal::GenerationModal;
