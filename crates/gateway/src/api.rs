//! HTTP routes.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::app::App;
use crate::proxy::ProxyError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/artguru", post(artguru_proxy))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct ProxyQuery {
    path: Option<String>,
}

/// Bare reverse proxy for the avatar-generation API. Forwards the raw
/// request body and returns the upstream response verbatim.
async fn artguru_proxy(
    State(app): State<Arc<App>>,
    Query(query): Query<ProxyQuery>,
    headers: axum::http::HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let path = query
        .path
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing API path parameter".to_string()))?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let upstream = app
        .artguru
        .forward(&path, content_type, body.to_vec())
        .await
        .map_err(ApiError::from)?;

    let mut response = Response::builder().status(upstream.status);
    let content_type = upstream
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    response = response.header(header::CONTENT_TYPE, content_type);

    response
        .body(axum::body::Body::from(upstream.body))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            ApiError::Internal(msg) => {
                tracing::error!("Proxy failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<ProxyError> for ApiError {
    fn from(e: ProxyError) -> Self {
        match e {
            ProxyError::InvalidPath(p) => ApiError::BadRequest(format!("Invalid API path: {p}")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
