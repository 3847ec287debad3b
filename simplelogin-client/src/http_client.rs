//! Authenticated HTTP transport
//!
//! One [`Transport::send`] call is one outbound request. Rate-limit retries and
//! response decoding live in [`crate::retry`] and [`crate::decode`]; this layer
//! only knows how to put an authenticated request on the wire and read back the
//! raw status, `Retry-After` header and body.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue, RETRY_AFTER};
use serde::Serialize;

use crate::error::{Error, Result, TransportError, TransportErrorKind};
use crate::utils::log_sanitizer::{mask_secret, truncate_for_log};

/// Header carrying the raw API key. The service does not use `Authorization`.
pub const AUTH_HEADER: &str = "Authentication";

/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default connect timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("simplelogin-cli/", env!("CARGO_PKG_VERSION"));

/// API key wrapper that never prints its value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Rejects empty (or whitespace-only) keys before any request can be built.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::validation("api_key", "API key is required"));
        }
        Ok(Self(key))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&mask_secret(&self.0)).finish()
    }
}

/// Methods the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Patch => reqwest::Method::PATCH,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request: method, path (query string included) and optional JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Path must be relative to the API root and start with `/`.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(Error::validation(
                "path",
                format!("API path must start with '/': {path}"),
            ));
        }
        Ok(Self {
            method,
            path,
            body: None,
        })
    }

    /// Attach a body serialized as JSON.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| Error::Encode {
            detail: e.to_string(),
        })?;
        self.body = Some(bytes);
        Ok(self)
    }
}

/// What came back from the wire, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Raw `Retry-After` header value, if present.
    pub retry_after: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            retry_after: None,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_retry_after(mut self, value: impl Into<String>) -> Self {
        self.retry_after = Some(value.into());
        self
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    pub fn is_error(&self) -> bool {
        self.status >= 400
    }

    /// `Retry-After` as whole seconds; `None` when absent or not an integer.
    pub fn retry_after_secs(&self) -> Option<u64> {
        self.retry_after
            .as_deref()
            .and_then(|v| v.trim().parse::<u64>().ok())
    }
}

/// Sends one request and returns the raw response.
///
/// Implemented by [`ReqwestTransport`] for real traffic; tests plug in scripted
/// implementations.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse>;
}

/// `reqwest`-backed transport owning the connection pool, base URL and API key.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<ApiKey>,
}

impl ReqwestTransport {
    pub fn new(
        base_url: &str,
        api_key: ApiKey,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout, connect_timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: Some(api_key),
        })
    }

    /// Transport that sends no `Authentication` header; only `/auth/*` accepts it.
    pub fn unauthenticated(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: build_http_client(
                Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
                Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            )?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn build_http_client(timeout: Duration, connect_timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| {
            TransportError::new(
                TransportErrorKind::ConnectionFailed,
                format!("failed to create HTTP client: {e}"),
            )
            .with_source(e)
            .into()
        })
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        match &self.api_key {
            Some(key) => log::debug!("{} {url} (key {})", request.method, mask_secret(key.expose())),
            None => log::debug!("{} {url}", request.method),
        }

        let mut builder = self
            .client
            .request(request.method.to_reqwest(), &url)
            .header(ACCEPT, "application/json");

        if let Some(key) = &self.api_key {
            let auth = HeaderValue::from_str(key.expose())
                .map_err(|_| Error::validation("api_key", "API key contains invalid characters"))?;
            builder = builder.header(AUTH_HEADER, auth);
        }

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().await.map_err(TransportError::from_reqwest)?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        // Header must be read before the body consumes the response
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.text().await.map_err(TransportError::from_reqwest)?;
        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        let err = ApiKey::new("").unwrap_err();
        assert!(
            matches!(&err, Error::Validation { field, .. } if field == "api_key"),
            "unexpected error: {err:?}"
        );
        assert!(ApiKey::new("   ").is_err());
    }

    #[test]
    fn api_key_debug_is_masked() {
        let key = ApiKey::new("supersecretkey1234").unwrap();
        let printed = format!("{key:?}");
        assert!(!printed.contains("supersecret"));
        assert!(printed.contains("1234"));
    }

    #[test]
    fn request_requires_leading_slash() {
        assert!(ApiRequest::new(HttpMethod::Get, "/stats").is_ok());
        let err = ApiRequest::new(HttpMethod::Get, "stats").unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "path"));
    }

    #[test]
    fn request_json_body_is_serialized() {
        let req = ApiRequest::new(HttpMethod::Post, "/mailboxes")
            .unwrap()
            .json(&serde_json::json!({"email": "a@b.c"}))
            .unwrap();
        assert_eq!(req.body.as_deref(), Some(br#"{"email":"a@b.c"}"#.as_slice()));
    }

    #[test]
    fn retry_after_parsing() {
        let resp = RawResponse::new(429, "").with_retry_after("7");
        assert_eq!(resp.retry_after_secs(), Some(7));
        let resp = RawResponse::new(429, "").with_retry_after("soon");
        assert_eq!(resp.retry_after_secs(), None);
        let resp = RawResponse::new(429, "").with_retry_after("-3");
        assert_eq!(resp.retry_after_secs(), None);
        assert_eq!(RawResponse::new(429, "").retry_after_secs(), None);
    }

    #[test]
    fn method_names() {
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
