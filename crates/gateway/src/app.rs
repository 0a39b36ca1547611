//! Application state passed to handlers via Axum state.

use crate::proxy::ArtguruProxy;

pub struct App {
    pub artguru: ArtguruProxy,
}
