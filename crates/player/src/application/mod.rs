//! Application layer - platform-agnostic services and helpers.

pub mod services;
pub mod timers;
