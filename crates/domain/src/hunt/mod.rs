//! Heritage-hunt progress state: the discovery board (catalog + filter +
//! selection) and the camera capture session.

pub mod board;
pub mod capture;
pub mod matcher;

pub use board::{DiscoveryFilter, HuntBoard};
pub use capture::{CaptureSession, CaptureState, ScanOutcome, ScanToken};
pub use matcher::{CoinFlipMatcher, ImageMatcher};
