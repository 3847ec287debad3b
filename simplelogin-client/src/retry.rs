//! Rate-limit retry policy
//!
//! Only HTTP 429 is retried. Every other response, error statuses included, is
//! handed back on the first attempt; this is not a general resilience layer.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{Result, TransportError};
use crate::http_client::{ApiRequest, RawResponse, Transport};

/// Default cap on total attempts (initial try included).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Wait used when a 429 carries no usable `Retry-After`.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
/// Longest wait honoured from a `Retry-After` header.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// How 429 responses are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, initial try included. `1` disables rate-limit handling:
    /// the 429 response goes to the decoder as-is.
    pub max_attempts: u32,
    /// Wait used when `Retry-After` is absent or unparsable.
    pub default_delay: Duration,
    /// Upper bound on any single wait.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            default_delay: DEFAULT_RETRY_DELAY,
            max_delay: MAX_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay before the next attempt after `response` was rate limited,
    /// capped at `max_delay`.
    pub fn delay_for(&self, response: &RawResponse) -> Duration {
        response
            .retry_after_secs()
            .map_or(self.default_delay, Duration::from_secs)
            .min(self.max_delay)
    }
}

/// Send `request`, retrying on 429 according to `policy`.
///
/// Both the in-flight request and the back-off sleep race `cancel`: once it
/// fires the call fails with `Cancelled` and no further attempt is made.
pub(crate) async fn send_with_retry(
    transport: &dyn Transport,
    request: &ApiRequest,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
) -> Result<RawResponse> {
    let max_attempts = policy.attempts();

    for attempt in 1..=max_attempts {
        let response = send_once(transport, request, cancel).await?;

        if !response.is_rate_limited() {
            return Ok(response);
        }

        if attempt == max_attempts {
            if max_attempts == 1 {
                // Retrying disabled; let the decoder report the rate limit
                return Ok(response);
            }
            break;
        }

        let delay = policy.delay_for(&response);
        log::warn!(
            "Rate limited on {} {} (attempt {attempt}/{max_attempts}), retrying in {:.1}s",
            request.method,
            request.path,
            delay.as_secs_f32()
        );

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                log::debug!("Retry wait cancelled for {} {}", request.method, request.path);
                return Err(TransportError::cancelled().into());
            }
            () = tokio::time::sleep(delay) => {}
        }
    }

    log::warn!(
        "Giving up on {} {} after {max_attempts} rate-limited attempts",
        request.method,
        request.path
    );
    Err(TransportError::retry_exhausted(max_attempts).into())
}

async fn send_once(
    transport: &dyn Transport,
    request: &ApiRequest,
    cancel: &CancellationToken,
) -> Result<RawResponse> {
    if cancel.is_cancelled() {
        return Err(TransportError::cancelled().into());
    }

    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(TransportError::cancelled().into()),
        result = transport.send(request) => result,
    }
}
