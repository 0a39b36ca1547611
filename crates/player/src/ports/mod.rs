//! Port traits (interfaces) for the player.
//!
//! Ports define the boundaries between the application core and the
//! platform-specific adapters in `infrastructure`.

pub mod outbound;
