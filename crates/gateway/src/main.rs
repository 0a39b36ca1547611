//! Sbiba Heritage AI Gateway - main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod proxy;

use app::App;
use proxy::{ArtguruProxy, ProxyConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from the repo root when run from crates/gateway.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sbiba_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sbiba Heritage Gateway");

    // Load configuration
    let auth_token = std::env::var("ARTGURU_AUTH_TOKEN")
        .map_err(|_| anyhow::anyhow!("ARTGURU_AUTH_TOKEN is not set"))?;
    let vtoken = std::env::var("ARTGURU_VTOKEN")
        .map_err(|_| anyhow::anyhow!("ARTGURU_VTOKEN is not set"))?;
    let base_url = std::env::var("ARTGURU_BASE_URL")
        .unwrap_or_else(|_| "https://api.picaapi.com/aigc/image".into());
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);

    let config = ProxyConfig {
        base_url,
        auth_token,
        vtoken,
    };
    let app = Arc::new(App {
        artguru: ArtguruProxy::new(config),
    });

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    let router = api::routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app);

    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Gateway listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in candidates {
        if std::path::Path::new(path).exists() {
            if dotenvy::from_path(path).is_ok() {
                tracing::debug!("Loaded environment from {path}");
            }
            break;
        }
    }
}
