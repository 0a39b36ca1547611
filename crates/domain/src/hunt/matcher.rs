//! Scan resolution capability.
//!
//! The shipped resolver is a coin flip: the original experience never
//! compares the captured frame against the element's reference imagery.
//! The trait keeps the seam explicit so a real recognizer can gate
//! success on `score >= recognition_threshold` without touching the
//! capture flow.

use crate::element::ModelReference;
use crate::hunt::capture::ScanOutcome;

/// Decides whether a captured frame matches the target element.
pub trait ImageMatcher {
    /// `captured` is an encoded frame (JPEG bytes in the current flow).
    fn resolve(&self, captured: &[u8], target: &ModelReference) -> ScanOutcome;
}

/// Unweighted random outcome, fed by an injected roll in [0, 1) so the
/// domain stays free of RNG state.
pub struct CoinFlipMatcher {
    roll: f64,
}

impl CoinFlipMatcher {
    pub fn new(roll: f64) -> Self {
        Self { roll }
    }
}

impl ImageMatcher for CoinFlipMatcher {
    fn resolve(&self, _captured: &[u8], _target: &ModelReference) -> ScanOutcome {
        if self.roll > 0.5 {
            ScanOutcome::Success
        } else {
            ScanOutcome::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> ModelReference {
        ModelReference {
            target_image_path: "/fig/after.jpg".to_string(),
            recognition_threshold: 0.85,
            alternative_angles: vec![],
        }
    }

    #[test]
    fn test_coin_flip_splits_on_half() {
        assert_eq!(
            CoinFlipMatcher::new(0.9).resolve(&[], &target()),
            ScanOutcome::Success
        );
        assert_eq!(
            CoinFlipMatcher::new(0.5).resolve(&[], &target()),
            ScanOutcome::Failure
        );
        assert_eq!(
            CoinFlipMatcher::new(0.1).resolve(&[], &target()),
            ScanOutcome::Failure
        );
    }
}
