//! Loyalty-point wallet.

use serde::{Deserialize, Serialize};

/// Starting balance shown in the navigation bar.
pub const INITIAL_POINTS: u32 = 1200;

/// Result of a spend attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpendResult {
    /// Balance after the purchase.
    Spent(u32),
    /// Balance unchanged; the purchase did not happen.
    InsufficientFunds,
}

/// Explicit points state owned by one top-level controller. No
/// persistence; the balance resets with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    points: u32,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(INITIAL_POINTS)
    }
}

impl Wallet {
    pub fn new(points: u32) -> Self {
        Self { points }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Deduct `amount` if covered; otherwise a no-op.
    pub fn spend(&mut self, amount: u32) -> SpendResult {
        match self.points.checked_sub(amount) {
            Some(remaining) => {
                self.points = remaining;
                SpendResult::Spent(remaining)
            }
            None => SpendResult::InsufficientFunds,
        }
    }

    /// Credit discovery rewards.
    pub fn earn(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_within_balance() {
        let mut wallet = Wallet::new(500);
        assert_eq!(wallet.spend(150), SpendResult::Spent(350));
        assert_eq!(wallet.points(), 350);
    }

    #[test]
    fn test_spend_exact_balance() {
        let mut wallet = Wallet::new(150);
        assert_eq!(wallet.spend(150), SpendResult::Spent(0));
    }

    #[test]
    fn test_spend_insufficient_is_noop() {
        let mut wallet = Wallet::new(100);
        assert_eq!(wallet.spend(150), SpendResult::InsufficientFunds);
        assert_eq!(wallet.points(), 100);
    }

    #[test]
    fn test_earn_accumulates() {
        let mut wallet = Wallet::new(0);
        wallet.earn(150);
        wallet.earn(100);
        assert_eq!(wallet.points(), 250);
    }
}
