//! Signal-backed state containers provided via Dioxus context.

mod chat_state;
mod hunt_state;
mod museum_state;
mod wallet_state;

pub use chat_state::ChatState;
pub use hunt_state::HuntState;
pub use museum_state::{AvatarStep, MuseumCharacter, MuseumState};
pub use wallet_state::WalletState;
