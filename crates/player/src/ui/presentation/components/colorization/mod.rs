mod before_after_slider;
mod colorization_modal;

pub use before_after_slider::BeforeAfterSlider;
pub use colorization_modal::ColorizationModal;
