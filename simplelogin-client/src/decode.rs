//! Response decoding and error mapping
//!
//! Turns a [`RawResponse`] into either a typed value or exactly one [`Error`]
//! variant. Nothing about a response is trusted partially: a success status
//! with a body that does not parse is itself a [`Error::Decode`].

use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::error::{Error, Result};
use crate::http_client::RawResponse;
use crate::utils::log_sanitizer::truncate_for_log;

const INVALID_API_KEY: &str = "Invalid API key";
const RATE_LIMIT_EXCEEDED: &str = "Rate limit exceeded";

/// `{"error": "..."}` body the service sends on most failures.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Decode a success body into `T`, or map the failure.
pub fn decode_json<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    if response.is_error() {
        return Err(map_error(response));
    }

    serde_json::from_str(&response.body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(&response.body));
        Error::Decode {
            detail: e.to_string(),
        }
    })
}

/// Accept a success response whose body carries nothing the caller needs.
///
/// An empty body is fine; a non-empty one must still be well-formed JSON.
pub fn decode_empty(response: &RawResponse) -> Result<()> {
    if response.is_error() {
        return Err(map_error(response));
    }

    if response.body.trim().is_empty() {
        return Ok(());
    }

    serde_json::from_str::<IgnoredAny>(&response.body)
        .map(|_| ())
        .map_err(|e| {
            log::error!("Malformed response body: {e}");
            Error::Decode {
                detail: e.to_string(),
            }
        })
}

/// Map an error response (status >= 400) to the error taxonomy.
///
/// A non-empty structured `error` message wins regardless of status. Without
/// one, 401 and 429 get dedicated variants and everything else becomes a bare
/// [`Error::Api`] carrying the raw body.
pub fn map_error(response: &RawResponse) -> Error {
    let status_code = response.status;

    if let Some(message) = structured_message(&response.body) {
        log::debug!("API error {status_code}: {message}");
        return Error::Api {
            status_code,
            message: Some(message),
            body: response.body.clone(),
        };
    }

    match status_code {
        401 => Error::Authentication {
            message: INVALID_API_KEY.to_string(),
        },
        429 => Error::RateLimit {
            retry_after: response.retry_after_secs().unwrap_or(0),
            message: RATE_LIMIT_EXCEEDED.to_string(),
        },
        _ => Error::Api {
            status_code,
            message: None,
            body: response.body.clone(),
        },
    }
}

fn structured_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
}
