//! Sbiba Heritage AI domain layer.
//!
//! Pure state and rules for the client: the collectible element catalog,
//! the heritage-hunt progress board, the capture session state machine,
//! the loyalty-point wallet, and the chat message vocabulary.
//!
//! No I/O lives here. Anything asynchronous (camera streams, timers,
//! backend calls) is driven from the player crate; this crate only holds
//! the state those flows mutate.

pub mod catalog;
pub mod element;
pub mod error;
pub mod hunt;
pub mod ids;
pub mod message;
pub mod product;
pub mod site;
pub mod wallet;

pub use element::{
    ClueBundle, Difficulty, ElementCategory, ElementDetails, ElementKind, ElementLocation,
    HistoricalElement, ModelReference, Rewards, TimeOfDay, UnlockRequirements,
};
pub use error::DomainError;
pub use hunt::capture::{RESULT_DISPLAY_MS, SCAN_DELAY_MS};
pub use hunt::{
    CaptureSession, CaptureState, CoinFlipMatcher, DiscoveryFilter, HuntBoard, ImageMatcher,
    ScanOutcome, ScanToken,
};
pub use ids::{ElementId, ProductId, SiteId};
pub use message::{ChatMessage, MessageBody, MessageMetadata};
pub use product::Product;
pub use site::HeritageSite;
pub use wallet::{SpendResult, Wallet, INITIAL_POINTS};
