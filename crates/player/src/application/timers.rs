//! Cancelable UI delays.
//!
//! Capture scans, staged generation overlays, and result screens all run
//! on "sleep then act" sequences that must die when their owner closes.
//! `SessionTimer` brands every delay with an epoch; `cancel` bumps the
//! epoch so in-flight delays report themselves stale instead of acting.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::ports::outbound::PlatformPort;

/// Epoch-guarded delay source. Cloning shares the epoch, so a clone held
/// by an async task observes cancels issued by the owner.
#[derive(Clone, Default)]
pub struct SessionTimer {
    epoch: Arc<AtomicU64>,
}

impl SessionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every delay currently in flight.
    pub fn cancel(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// Sleep for `ms`; returns `false` when a cancel happened while
    /// sleeping, in which case the caller must not act.
    pub async fn delay(&self, platform: &dyn PlatformPort, ms: u64) -> bool {
        let epoch = self.epoch.load(Ordering::SeqCst);
        platform.sleep_ms(ms).await;
        epoch == self.epoch.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::create_platform;

    #[tokio::test]
    async fn test_delay_completes_when_not_canceled() {
        let platform = create_platform();
        let timer = SessionTimer::new();
        assert!(timer.delay(&platform, 1).await);
    }

    #[tokio::test]
    async fn test_cancel_invalidates_inflight_delay() {
        let platform = create_platform();
        let timer = SessionTimer::new();

        let delay = timer.delay(&platform, 50);
        let cancel = async {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            timer.cancel();
        };
        let (survived, ()) = futures_util::join!(delay, cancel);
        assert!(!survived);
    }

    #[tokio::test]
    async fn test_clone_shares_the_epoch() {
        let platform = create_platform();
        let timer = SessionTimer::new();
        let clone = timer.clone();

        clone.cancel();
        // The cancel landed before the delay started, so this one runs.
        assert!(timer.delay(&platform, 1).await);

        let delay = timer.delay(&platform, 50);
        let cancel = async {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            clone.cancel();
        };
        let (survived, ()) = futures_util::join!(delay, cancel);
        assert!(!survived);
    }
}
