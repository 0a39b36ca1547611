mod message_display;
mod writing_indicator;

pub use message_display::MessageDisplay;
pub use writing_indicator::WritingIndicator;
