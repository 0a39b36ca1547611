//! Application services - typed wrappers over the raw HTTP port.

mod artifact_service;
mod avatar_service;
mod chat_service;
mod coloration_service;

pub use artifact_service::ArtifactService;
pub use avatar_service::{AvatarError, AvatarService, POLL_ATTEMPTS, POLL_INTERVAL_MS};
pub use chat_service::ChatService;
pub use coloration_service::ColorationService;
