//! Sbiba Heritage Player - unified composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sbiba_player::ports::outbound::PlatformPort;

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
const DEFAULT_GATEWAY_URL: &str = "http://localhost:3000";

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sbiba_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Sbiba Heritage Player");

    // Platform
    let platform = sbiba_player::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // Backend endpoints
    let backend_url = {
        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var("SBIBA_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
        }
        #[cfg(target_arch = "wasm32")]
        {
            DEFAULT_BACKEND_URL.to_string()
        }
    };
    let gateway_url = {
        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var("SBIBA_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string())
        }
        #[cfg(target_arch = "wasm32")]
        {
            DEFAULT_GATEWAY_URL.to_string()
        }
    };

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);

            if width < 768.0 {
                sbiba_player::ui::ShellKind::Mobile
            } else {
                sbiba_player::ui::ShellKind::Desktop
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var("SBIBA_SHELL")
                .ok()
                .and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
                    "desktop" => Some(sbiba_player::ui::ShellKind::Desktop),
                    "mobile" => Some(sbiba_player::ui::ShellKind::Mobile),
                    _ => None,
                })
                .unwrap_or_default()
        }
    };

    // The HTTP and camera adapters are built inside the runtime (the
    // camera port is not Send); only the endpoints cross the boundary.
    let config = sbiba_player::ui::PlayerConfig {
        backend_url,
        gateway_url,
    };

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!(
            "<script type=\"module\" src=\"{}\"></script><style>{}</style>",
            sbiba_player::presentation::components::reconstruction::MODEL_VIEWER_SCRIPT_SRC,
            css
        );
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(shell)
        .with_context(config)
        .launch(sbiba_player::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/main.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
