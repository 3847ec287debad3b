//! API client
//!
//! A [`Client`] is built once per invocation and is immutable afterwards. It
//! owns the transport (connection pool, base URL, key), the rate-limit retry
//! policy and the cancellation token every call races against.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::decode::{decode_empty, decode_json};
use crate::error::Result;
use crate::http_client::{
    ApiKey, ApiRequest, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, HttpMethod,
    RawResponse, ReqwestTransport, Transport,
};
use crate::retry::{RetryPolicy, send_with_retry};

/// Public SimpleLogin API root.
pub const DEFAULT_BASE_URL: &str = "https://app.simplelogin.io/api";

/// SimpleLogin API client.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    retry_policy: RetryPolicy,
    cancel: CancellationToken,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("retry_policy", &self.retry_policy)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Client against the public API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Token raced by every call; cancelling it aborts the outstanding call.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Send a request through the retry policy and return the raw response.
    pub async fn execute(&self, request: &ApiRequest) -> Result<RawResponse> {
        send_with_retry(self.transport.as_ref(), request, &self.retry_policy, &self.cancel).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = ApiRequest::new(HttpMethod::Get, path)?;
        let response = self.execute(&request).await?;
        decode_json(&response)
    }

    pub(crate) async fn send_json<B, T>(&self, method: HttpMethod, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(method, path)?.json(body)?;
        let response = self.execute(&request).await?;
        decode_json(&response)
    }

    /// Body-less request with a JSON response.
    pub(crate) async fn send_bare<T: DeserializeOwned>(&self, method: HttpMethod, path: &str) -> Result<T> {
        let request = ApiRequest::new(method, path)?;
        let response = self.execute(&request).await?;
        decode_json(&response)
    }

    /// JSON body, response carries nothing the caller needs.
    pub(crate) async fn send_json_empty<B>(&self, method: HttpMethod, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(method, path)?.json(body)?;
        let response = self.execute(&request).await?;
        decode_empty(&response)
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    connect_timeout: Duration,
    retry_policy: RetryPolicy,
    cancel: Option<CancellationToken>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            retry_policy: RetryPolicy::default(),
            cancel: None,
            transport: None,
        }
    }
}

impl ClientBuilder {
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bound on each attempt.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    #[must_use]
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Replace the HTTP transport (tests, custom stacks).
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validates the API key before anything touches the network.
    pub fn build(self) -> Result<Client> {
        let api_key = ApiKey::new(self.api_key.unwrap_or_default())?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(
                &self.base_url,
                api_key,
                self.timeout,
                self.connect_timeout,
            )?),
        };

        Ok(Client {
            transport,
            retry_policy: self.retry_policy,
            cancel: self.cancel.unwrap_or_default(),
        })
    }
}
