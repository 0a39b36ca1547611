use std::sync::Arc;

use dioxus::prelude::*;

use crate::ports::outbound::PlatformPort;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the composition root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Endpoint configuration resolved by the composition root.
///
/// Passed through `LaunchBuilder::with_context` (which wants `Send`);
/// the non-`Send` service bundle is built from it inside the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerConfig {
    pub backend_url: String,
    pub gateway_url: String,
}

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let config = use_context::<PlayerConfig>();
    let platform = use_platform();

    // Adapters and services live inside the runtime because the camera
    // port is not Send.
    {
        let platform = platform.clone();
        use_context_provider(move || {
            let backend: Arc<dyn crate::ports::outbound::ApiPort> = Arc::new(
                crate::infrastructure::http_client::ApiAdapter::new(config.backend_url.clone()),
            );
            let gateway: Arc<dyn crate::ports::outbound::ApiPort> = Arc::new(
                crate::infrastructure::http_client::ApiAdapter::new(config.gateway_url.clone()),
            );
            let camera = crate::infrastructure::camera::create_camera();
            presentation::Services::new(backend, gateway, camera, platform, config.backend_url)
        });
    }

    // These must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::WalletState::new);
    use_context_provider(presentation::state::HuntState::new);
    use_context_provider(presentation::state::ChatState::new);
    use_context_provider(presentation::state::MuseumState::new);

    use_effect(move || {
        platform.set_page_title("Sbiba Heritage AI");
    });

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/main.css"),
        }
        // Registers the <model-viewer> element for the reconstruction viewer.
        document::Script {
            src: presentation::components::reconstruction::MODEL_VIEWER_SCRIPT_SRC.to_string(),
            r#type: "module",
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        Router::<routes::Route> {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        Router::<routes::Route> {}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "app-shell app-shell-desktop",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    // Same router and bounds for now; a separate component keeps the
    // door open for a mobile-first layout.
    rsx! {
        div {
            class: "app-shell app-shell-mobile",
            {children}
        }
    }
}
