//! Reusable components, grouped by feature page.

pub mod chat;
pub mod colorization;
pub mod hunt;
pub mod market;
pub mod movie;
pub mod museum;
pub mod reconstruction;
