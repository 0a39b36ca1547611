//! Upstream client for the avatar-generation API.
//!
//! The gateway is a bare reverse proxy: the player posts a raw body plus
//! a `path` segment, and the upstream response (status, body,
//! content-type) is returned verbatim. The only thing added here is the
//! fixed header set the upstream expects, including the two secret
//! tokens that must never reach the browser.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid upstream path: {0}")]
    InvalidPath(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("invalid header value")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub base_url: String,
    pub auth_token: String,
    pub vtoken: String,
}

/// What the upstream returned, passed through untouched.
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

pub struct ArtguruProxy {
    client: Client,
    config: ProxyConfig,
}

impl ArtguruProxy {
    pub fn new(config: ProxyConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            config: ProxyConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        }
    }

    /// Forward `body` to `{base_url}/{path}` and return the upstream
    /// response verbatim.
    pub async fn forward(
        &self,
        path: &str,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> Result<UpstreamResponse, ProxyError> {
        let url = upstream_url(&self.config.base_url, path)?;
        let headers = upstream_headers(&self.config, content_type)?;

        tracing::debug!(%url, "Forwarding avatar API request");
        let response = self
            .client
            .post(url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let upstream_content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(UpstreamResponse {
            status,
            content_type: upstream_content_type,
            body,
        })
    }
}

/// Build the upstream URL, rejecting path traversal and absolute URLs.
fn upstream_url(base_url: &str, path: &str) -> Result<String, ProxyError> {
    if path.is_empty() || path.contains("..") || path.contains("://") || path.starts_with('/') {
        return Err(ProxyError::InvalidPath(path.to_string()));
    }
    Ok(format!("{base_url}/{path}"))
}

/// Fixed header set for the upstream, plus the caller's content type.
fn upstream_headers(
    config: &ProxyConfig,
    content_type: Option<&str>,
) -> Result<HeaderMap, ProxyError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", config.auth_token))?,
    );
    headers.insert(
        HeaderName::from_static("vtoken"),
        HeaderValue::from_str(&config.vtoken)?,
    );
    headers.insert(
        HeaderName::from_static("app-version-code"),
        HeaderValue::from_static("1040200"),
    );
    headers.insert(
        HeaderName::from_static("distinct-id"),
        HeaderValue::from_static("194c2a6aec879a-0555435a87d4bc8-1d525636-2007040-194c2a6aec9abb"),
    );
    headers.insert(
        HeaderName::from_static("accept-language"),
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(HeaderName::from_static("from"), HeaderValue::from_static("web"));
    headers.insert(HeaderName::from_static("lang"), HeaderValue::from_static("en"));
    headers.insert(
        HeaderName::from_static("origin"),
        HeaderValue::from_static("https://www.artguru.ai"),
    );
    headers.insert(
        HeaderName::from_static("referer"),
        HeaderValue::from_static("https://www.artguru.ai/"),
    );
    if let Some(ct) = content_type {
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(ct)?);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProxyConfig {
        ProxyConfig {
            base_url: "https://api.example.com/aigc/image".to_string(),
            auth_token: "secret-token".to_string(),
            vtoken: "v-secret".to_string(),
        }
    }

    #[test]
    fn test_upstream_url_joins_path() {
        let url = upstream_url(&config().base_url, "generate-or-queue").expect("valid path");
        assert_eq!(url, "https://api.example.com/aigc/image/generate-or-queue");
    }

    #[test]
    fn test_upstream_url_rejects_traversal_and_absolute() {
        for bad in ["", "../secrets", "http://evil.example/x", "/etc/passwd"] {
            assert!(upstream_url(&config().base_url, bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_upstream_headers_carry_tokens() {
        let headers = upstream_headers(&config(), Some("application/json")).expect("headers");
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer secret-token")
        );
        assert_eq!(
            headers.get("vtoken").and_then(|v| v.to_str().ok()),
            Some("v-secret")
        );
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn test_upstream_headers_without_content_type() {
        let headers = upstream_headers(&config(), None).expect("headers");
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_proxy_trims_trailing_slash_on_base_url() {
        let proxy = ArtguruProxy::new(ProxyConfig {
            base_url: "https://api.example.com/aigc/image/".to_string(),
            ..config()
        });
        assert_eq!(proxy.config.base_url, "https://api.example.com/aigc/image");
    }
}
