use std::fmt;

use thiserror::Error;

/// Boxed underlying cause kept on transport failures for logging.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a request never produced a usable HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The attempt exceeded the per-request timeout.
    Timeout,
    /// The connection could not be established or broke mid-flight.
    ConnectionFailed,
    /// Every allowed attempt was answered with HTTP 429.
    RetryExhausted,
    /// The caller cancelled the call before it completed.
    Cancelled,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Timeout => "request timed out",
            Self::ConnectionFailed => "connection failed",
            Self::RetryExhausted => "max retries exceeded",
            Self::Cancelled => "request cancelled",
        };
        f.write_str(label)
    }
}

/// Failure below the HTTP layer.
///
/// The original `reqwest` error, when there is one, is preserved as the
/// [`source`](std::error::Error::source) so that callers can log the full chain.
#[derive(Debug, Error)]
#[error("{kind}: {detail}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub detail: String,
    #[source]
    pub source: Option<BoxedCause>,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxedCause>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn cancelled() -> Self {
        Self::new(TransportErrorKind::Cancelled, "operation was cancelled by the caller")
    }

    pub fn retry_exhausted(attempts: u32) -> Self {
        Self::new(
            TransportErrorKind::RetryExhausted,
            format!("still rate limited after {attempts} attempts"),
        )
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else {
            TransportErrorKind::ConnectionFailed
        };
        Self::new(kind, err.to_string()).with_source(err)
    }
}

/// Every failure a client call can produce.
///
/// The mapping from an HTTP response to this enum is total: a response is either
/// a decoded success value or exactly one of these variants.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a usable response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A success response whose body did not match the expected shape.
    #[error("failed to decode response: {detail}")]
    Decode { detail: String },

    /// A request body could not be serialized.
    #[error("failed to encode request body: {detail}")]
    Encode { detail: String },

    /// HTTP 401 without a structured error message.
    #[error("authentication error: {message}")]
    Authentication { message: String },

    /// HTTP 429 that reached the decoder (retries exhausted or disabled).
    #[error("rate limit exceeded (retry after {retry_after} seconds): {message}")]
    RateLimit { retry_after: u64, message: String },

    /// Any other HTTP error status.
    #[error("API error (status {status_code}): {}", api_error_detail(.message, .body))]
    Api {
        status_code: u16,
        message: Option<String>,
        body: String,
    },

    /// Rejected locally before any network call.
    #[error("validation error for field '{field}': {message}")]
    Validation { field: String, message: String },
}

impl Error {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the failure was caused by the caller (bad input, bad key, missing
    /// resource) rather than by the network or the service.
    ///
    /// Returns `true` for failures that should be logged at `warn`, `false` for `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation { .. } | Self::Authentication { .. } => true,
            Self::Api { status_code, .. } => (400..500).contains(status_code),
            Self::Transport(e) => e.kind == TransportErrorKind::Cancelled,
            Self::Decode { .. } | Self::Encode { .. } | Self::RateLimit { .. } => false,
        }
    }

    /// Transport failure kind, if this is a transport failure.
    pub fn transport_kind(&self) -> Option<TransportErrorKind> {
        match self {
            Self::Transport(e) => Some(e.kind),
            _ => None,
        }
    }
}

fn api_error_detail<'a>(message: &'a Option<String>, body: &'a str) -> &'a str {
    message.as_deref().unwrap_or(body)
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display() {
        let err = Error::validation("test_field", "test message");
        assert_eq!(
            err.to_string(),
            "validation error for field 'test_field': test message"
        );
    }

    #[test]
    fn api_error_display_prefers_message() {
        let err = Error::Api {
            status_code: 400,
            message: Some("Bad Request".into()),
            body: "error body".into(),
        };
        assert_eq!(err.to_string(), "API error (status 400): Bad Request");
    }

    #[test]
    fn api_error_display_falls_back_to_body() {
        let err = Error::Api {
            status_code: 500,
            message: None,
            body: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error (status 500): Internal Server Error");
    }

    #[test]
    fn authentication_display() {
        let err = Error::Authentication {
            message: "Invalid API key".into(),
        };
        assert_eq!(err.to_string(), "authentication error: Invalid API key");
    }

    #[test]
    fn rate_limit_display() {
        let err = Error::RateLimit {
            retry_after: 60,
            message: "Rate limit exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "rate limit exceeded (retry after 60 seconds): Rate limit exceeded"
        );
    }

    #[test]
    fn transport_display_includes_kind() {
        let err: Error = TransportError::retry_exhausted(3).into();
        assert_eq!(
            err.to_string(),
            "max retries exceeded: still rate limited after 3 attempts"
        );
        assert_eq!(err.transport_kind(), Some(TransportErrorKind::RetryExhausted));
    }

    #[test]
    fn transport_source_is_preserved() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = TransportError::new(TransportErrorKind::ConnectionFailed, "boom").with_source(cause);
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("refused"));
    }

    #[test]
    fn expected_classification() {
        assert!(Error::validation("x", "y").is_expected());
        assert!(
            Error::Api {
                status_code: 404,
                message: None,
                body: String::new()
            }
            .is_expected()
        );
        assert!(
            !Error::Api {
                status_code: 502,
                message: None,
                body: String::new()
            }
            .is_expected()
        );
        assert!(!Error::Decode { detail: "x".into() }.is_expected());
        assert!(Error::from(TransportError::cancelled()).is_expected());
    }
}
