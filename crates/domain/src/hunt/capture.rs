//! Capture session state machine.
//!
//! A capture session is the bounded interaction from opening the camera
//! view to a resolved scan outcome: `Idle -> Capturing -> Scanning ->
//! Resolved(outcome)`. The session itself is pure state; the player crate
//! drives it from the camera modal and its timers.
//!
//! Every externally-scheduled effect (the simulated scan delay, the
//! result display delay) carries a [`ScanToken`] minted when the effect
//! was scheduled. Closing the session bumps the epoch, so a token minted
//! before the close can never mutate the session afterwards. That is the
//! stale-callback guard: timers do not need to be individually tracked
//! here, their effects simply stop applying.

use serde::{Deserialize, Serialize};

use crate::ids::ElementId;

/// Simulated scan delay before an outcome is decided.
pub const SCAN_DELAY_MS: u64 = 1500;
/// How long a resolution overlay stays up before the flow moves on.
pub const RESULT_DISPLAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanOutcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    /// Camera stream live, waiting for the user to press capture.
    Capturing,
    /// Capture pressed, simulated scan in flight.
    Scanning,
    /// Outcome overlay showing.
    Resolved(ScanOutcome),
}

/// Proof that an effect was scheduled during the current session epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanToken {
    epoch: u64,
}

#[derive(Debug, Clone)]
pub struct CaptureSession {
    state: CaptureState,
    epoch: u64,
    target: Option<ElementId>,
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            state: CaptureState::Idle,
            epoch: 0,
            target: None,
        }
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn target(&self) -> Option<&ElementId> {
        self.target.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.state != CaptureState::Idle
    }

    /// Open the session for the given element. The caller acquires the
    /// camera stream after this; if acquisition fails it calls [`close`]
    /// and reports the error, with no automatic retry.
    ///
    /// [`close`]: CaptureSession::close
    pub fn open(&mut self, target: ElementId) {
        self.epoch += 1;
        self.state = CaptureState::Capturing;
        self.target = Some(target);
    }

    /// User pressed the capture button. Returns a token for the scheduled
    /// scan-delay effect, or `None` if the session is not in a state that
    /// accepts a capture (already scanning, showing a result, or closed).
    pub fn begin_scan(&mut self) -> Option<ScanToken> {
        if self.state != CaptureState::Capturing {
            return None;
        }
        self.state = CaptureState::Scanning;
        Some(ScanToken { epoch: self.epoch })
    }

    /// Apply the scan outcome decided after the simulated delay. Stale
    /// tokens (session closed or reopened in the meantime) are ignored.
    /// Returns a token for the result-display effect when applied.
    pub fn resolve(&mut self, token: ScanToken, outcome: ScanOutcome) -> Option<ScanToken> {
        if token.epoch != self.epoch || self.state != CaptureState::Scanning {
            return None;
        }
        self.state = CaptureState::Resolved(outcome);
        Some(ScanToken { epoch: self.epoch })
    }

    /// End the result display. On success the session closes and yields
    /// the element id to unlock; on failure the session returns to
    /// `Capturing` so another attempt can start without re-acquiring the
    /// camera stream. Stale tokens are ignored.
    pub fn finish(&mut self, token: ScanToken) -> Option<ElementId> {
        if token.epoch != self.epoch {
            return None;
        }
        match self.state {
            CaptureState::Resolved(ScanOutcome::Success) => {
                let target = self.target.take();
                self.close();
                target
            }
            CaptureState::Resolved(ScanOutcome::Failure) => {
                self.state = CaptureState::Capturing;
                None
            }
            _ => None,
        }
    }

    /// Tear down the session from any state. Bumps the epoch so effects
    /// scheduled before the close can no longer apply. The caller
    /// releases the camera stream alongside this on every exit path.
    pub fn close(&mut self) {
        self.epoch += 1;
        self.state = CaptureState::Idle;
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_session() -> CaptureSession {
        let mut session = CaptureSession::new();
        session.open(ElementId::from("CAP-001"));
        session
    }

    #[test]
    fn test_capture_flow_success() {
        let mut session = open_session();
        let scan = session.begin_scan().expect("capturing accepts a scan");
        let shown = session
            .resolve(scan, ScanOutcome::Success)
            .expect("fresh token resolves");
        assert_eq!(
            session.state(),
            &CaptureState::Resolved(ScanOutcome::Success)
        );
        let unlocked = session.finish(shown);
        assert_eq!(unlocked, Some(ElementId::from("CAP-001")));
        assert_eq!(session.state(), &CaptureState::Idle);
    }

    #[test]
    fn test_failure_returns_to_capturing_without_reopen() {
        let mut session = open_session();
        let scan = session.begin_scan().expect("scan");
        let shown = session.resolve(scan, ScanOutcome::Failure).expect("resolve");
        assert_eq!(session.finish(shown), None);
        // Another attempt is possible straight away.
        assert!(session.begin_scan().is_some());
    }

    #[test]
    fn test_close_invalidates_pending_scan() {
        let mut session = open_session();
        let scan = session.begin_scan().expect("scan");
        session.close();
        // The timer fires after the modal closed; nothing may change.
        assert_eq!(session.resolve(scan, ScanOutcome::Success), None);
        assert_eq!(session.state(), &CaptureState::Idle);
    }

    #[test]
    fn test_reopen_invalidates_tokens_from_previous_session() {
        let mut session = open_session();
        let stale = session.begin_scan().expect("scan");
        session.close();
        session.open(ElementId::from("COL-001"));
        assert_eq!(session.resolve(stale, ScanOutcome::Success), None);
        assert_eq!(session.state(), &CaptureState::Capturing);
    }

    #[test]
    fn test_stale_finish_does_not_unlock() {
        let mut session = open_session();
        let scan = session.begin_scan().expect("scan");
        let shown = session.resolve(scan, ScanOutcome::Success).expect("resolve");
        session.close();
        assert_eq!(session.finish(shown), None);
    }

    #[test]
    fn test_begin_scan_rejected_while_resolving() {
        let mut session = open_session();
        let scan = session.begin_scan().expect("scan");
        session.resolve(scan, ScanOutcome::Failure).expect("resolve");
        assert!(session.begin_scan().is_none());
    }

    #[test]
    fn test_two_failures_then_success_unlocks_exactly_once() {
        let mut session = open_session();
        let mut unlocks = Vec::new();
        for outcome in [ScanOutcome::Failure, ScanOutcome::Failure, ScanOutcome::Success] {
            let scan = session.begin_scan().expect("scan");
            let shown = session.resolve(scan, outcome).expect("resolve");
            if let Some(id) = session.finish(shown) {
                unlocks.push(id);
            }
        }
        assert_eq!(unlocks, vec![ElementId::from("CAP-001")]);
        assert_eq!(session.state(), &CaptureState::Idle);
    }
}
