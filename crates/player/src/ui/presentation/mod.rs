//! Presentation layer - components, views, state, and service contexts.

pub mod components;
pub mod services;
pub mod state;
pub mod views;

pub use services::{use_services, Services};
