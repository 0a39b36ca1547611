//! Infrastructure adapters.
//!
//! Platform-specific implementations of the outbound ports: time, sleep,
//! random, logging, HTTP, and the device camera. The correct adapter set
//! is selected at compile time via `cfg(target_arch)`.

pub mod camera;
pub mod http_client;
pub mod platform;
