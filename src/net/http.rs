//! Authenticated HTTP plumbing shared by every endpoint helper.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, carrying
//! `Authorization: Bearer <jwt>` from `localStorage`.
//! Native builds (tests, tooling): every call fails with `ApiError::Network`
//! since the endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-OK statuses become `ApiError::from_status`. A 401/403 additionally
//! clears the stored token and sends the browser to the login route, so
//! callers only have to surface the message.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::ApiError;

/// Unreserved characters (RFC 3986) stay literal; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "no disponible fuera del navegador";

/// HTTP verbs used against the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Request body variants.
pub enum Body {
    Empty,
    Json(String),
    #[cfg(feature = "csr")]
    Form(web_sys::FormData),
}

/// File picked for a multipart upload. Only the browser build can hold a
/// real file, so native code never constructs one.
#[derive(Clone, Debug)]
pub struct UploadFile {
    #[cfg(feature = "csr")]
    file: web_sys::File,
    pub name: String,
}

#[cfg(feature = "csr")]
impl UploadFile {
    pub fn new(file: web_sys::File) -> Self {
        let name = file.name();
        Self { file, name }
    }
}

/// Escape one path segment or query value.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Append `key=value` pairs to `path`, escaping values.
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", encode_component(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Decode a response body, treating an empty body as JSON `null`.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body does not match `T`.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Thin authenticated client bound to one `AppConfig`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// `GET` and decode JSON.
    ///
    /// # Errors
    ///
    /// Network, status or decode failures.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::Get, path, Body::Empty, &[]).await?;
        decode_body(&text)
    }

    /// Send a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Network, status or decode failures.
    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json_with_headers(method, path, body, &[]).await
    }

    /// Like `send_json`, with extra request headers.
    ///
    /// # Errors
    ///
    /// Network, status or decode failures.
    pub async fn send_json_with_headers<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        headers: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let text = self.execute(method, path, Body::Json(payload), headers).await?;
        decode_body(&text)
    }

    /// Send a request whose response body is ignored.
    ///
    /// # Errors
    ///
    /// Network or status failures.
    pub async fn send_unit<B: Serialize>(&self, method: Method, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        let body = match body {
            Some(b) => Body::Json(serde_json::to_string(b).map_err(|e| ApiError::Decode(e.to_string()))?),
            None => Body::Empty,
        };
        self.execute(method, path, body, &[]).await.map(|_| ())
    }

    /// Upload one file as multipart field `file`.
    ///
    /// # Errors
    ///
    /// Network or status failures.
    pub async fn upload(&self, path: &str, file: &UploadFile) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        let body = {
            let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
            form.append_with_blob_and_filename("file", &file.file, &file.name)
                .map_err(|e| ApiError::Network(format!("{e:?}")))?;
            Body::Form(form)
        };
        #[cfg(not(feature = "csr"))]
        let body = {
            let _ = file;
            Body::Empty
        };
        self.execute(Method::Post, path, body, &[]).await.map(|_| ())
    }

    #[cfg(feature = "csr")]
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Body,
        headers: &[(&str, String)],
    ) -> Result<String, ApiError> {
        use gloo_net::http::Request;

        let url = self.config.url(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        if !matches!(body, Body::Form(_)) {
            builder = builder.header("Content-Type", "application/json");
        }
        if let Some(token) = crate::util::storage::load_token(&self.config.token_key) {
            builder = builder.header("Authorization", &bearer(&token));
        }
        for (key, value) in headers {
            builder = builder.header(key, value);
        }

        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(payload) => builder.body(payload),
            Body::Form(form) => builder.body(form),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| {
            leptos::logging::warn!("request to {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        if resp.ok() {
            return Ok(text);
        }

        let err = ApiError::from_status(status, &text);
        leptos::logging::warn!("{url} -> {status}: {err}");
        if err.is_auth_failure() {
            crate::util::storage::clear_token(&self.config.token_key);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&self.config.login_url);
            }
        }
        Err(err)
    }

    #[cfg(not(feature = "csr"))]
    #[allow(clippy::unused_async)]
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Body,
        headers: &[(&str, String)],
    ) -> Result<String, ApiError> {
        let _ = (method, self.config.url(path), body, headers);
        Err(ApiError::Network(UNAVAILABLE.to_owned()))
    }
}
