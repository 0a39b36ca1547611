//! Wallet state - loyalty points shared across pages.

use dioxus::prelude::*;
use sbiba_domain::{SpendResult, Wallet, INITIAL_POINTS};

/// Points balance shown in the navigation bar and spent in the store.
/// Not persisted: a reload starts over with the initial balance.
#[derive(Clone, Copy)]
pub struct WalletState {
    wallet: Signal<Wallet>,
}

impl WalletState {
    pub fn new() -> Self {
        Self {
            wallet: Signal::new(Wallet::new(INITIAL_POINTS)),
        }
    }

    pub fn points(&self) -> u32 {
        self.wallet.read().points()
    }

    /// Attempt a purchase. Insufficient balance leaves the wallet
    /// unchanged and reports it, nothing else.
    pub fn spend(&mut self, amount: u32) -> SpendResult {
        self.wallet.write().spend(amount)
    }

    pub fn earn(&mut self, amount: u32) {
        self.wallet.write().earn(amount)
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::new()
    }
}
