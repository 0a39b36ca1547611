//! HTTP adapter implementing [`ApiPort`].
//!
//! Uses `gloo-net` in the browser and `reqwest` on native. One adapter
//! instance is created per backend base URL (heritage backend, avatar
//! gateway) by the composition root.

use serde_json::Value;

use crate::ports::outbound::{ApiError, ApiPort};

/// HTTP client bound to a single base URL.
pub struct ApiAdapter {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

// =============================================================================
// Native implementation (reqwest)
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl ApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_native(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_native(response).await
    }

    async fn post_image(
        &self,
        path: &str,
        field: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("image/jpeg")
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);

        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_native(response).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn decode_native(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, body });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// Browser implementation (gloo-net)
// =============================================================================

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl ApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = gloo_net::http::Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_wasm(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = gloo_net::http::Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_wasm(response).await
    }

    async fn post_image(
        &self,
        path: &str,
        field: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ApiError> {
        let form = jpeg_form_data(field, filename, &bytes)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;

        let response = gloo_net::http::Request::post(&self.url(path))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_wasm(response).await
    }
}

#[cfg(target_arch = "wasm32")]
async fn decode_wasm(response: gloo_net::http::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, body });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Build a browser `FormData` with one JPEG blob part.
#[cfg(target_arch = "wasm32")]
fn jpeg_form_data(
    field: &str,
    filename: &str,
    bytes: &[u8],
) -> Result<web_sys::FormData, wasm_bindgen::JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/jpeg");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let form = web_sys::FormData::new()?;
    form.append_with_blob_and_filename(field, &blob, filename)?;
    Ok(form)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_with_and_without_slash() {
        let adapter = ApiAdapter::new("http://localhost:5000/");
        assert_eq!(adapter.url("/chat"), "http://localhost:5000/chat");
        assert_eq!(adapter.url("chat"), "http://localhost:5000/chat");
    }

    #[test]
    fn test_url_keeps_query_strings() {
        let adapter = ApiAdapter::new("http://localhost:3000");
        assert_eq!(
            adapter.url("/api/artguru?path=upload"),
            "http://localhost:3000/api/artguru?path=upload"
        );
    }
}
