//! Service providers for the presentation layer
//!
//! Application services are bundled here and provided via Dioxus context
//! so components can use `use_services()` without depending on
//! infrastructure implementations.
//!
//! The bundle is deliberately not `Send`: the camera port wraps a
//! thread-bound browser media stream, and the UI runtime is
//! single-threaded anyway.

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::services::{
    ArtifactService, AvatarService, ChatService, ColorationService,
};
use crate::ports::outbound::{ApiPort, CameraPort, PlatformPort};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub chat: Arc<ChatService>,
    pub coloration: Arc<ColorationService>,
    pub artifact: Arc<ArtifactService>,
    pub avatar: Arc<AvatarService>,
    pub camera: Rc<dyn CameraPort>,
    /// Base URL of the heritage backend, used to resolve media paths.
    backend_base: String,
}

impl Services {
    pub fn new(
        backend: Arc<dyn ApiPort>,
        gateway: Arc<dyn ApiPort>,
        camera: Rc<dyn CameraPort>,
        platform: Arc<dyn PlatformPort>,
        backend_base: impl Into<String>,
    ) -> Self {
        Self {
            chat: Arc::new(ChatService::new(backend.clone())),
            coloration: Arc::new(ColorationService::new(backend.clone())),
            artifact: Arc::new(ArtifactService::new(backend)),
            avatar: Arc::new(AvatarService::new(gateway, platform)),
            camera,
            backend_base: backend_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a backend-relative media path (images, GLB models,
    /// videos) to an absolute URL under the backend's static root.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}/static{}", self.backend_base, path)
        } else {
            format!("{}/static/{}", self.backend_base, path)
        }
    }
}

/// Hook to access the service bundle from Dioxus context
pub fn use_services() -> Services {
    use_context::<Services>()
}
