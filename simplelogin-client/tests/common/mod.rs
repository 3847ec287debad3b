//! Shared helpers for the wiremock-backed integration tests.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use simplelogin_client::{Client, RetryPolicy};
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-api-key-0123456789";

/// Assert a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Assert a `Result` is `Err` and unwrap the error.
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// Retry policy that never waits long, for servers that omit `Retry-After`.
pub fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        default_delay: Duration::from_millis(10),
        ..RetryPolicy::default()
    }
}

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> Client {
    client_with(server, fast_retry())
}

pub fn client_with(server: &MockServer, policy: RetryPolicy) -> Client {
    match Client::builder()
        .api_key(TEST_KEY)
        .base_url(server.uri())
        .retry_policy(policy)
        .timeout(Duration::from_secs(5))
        .build()
    {
        Ok(client) => client,
        Err(e) => panic!("failed to build test client: {e}"),
    }
}

pub fn alias_json(id: u64, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "name": null,
        "enabled": true,
        "creation_date": "2024-01-15 10:30:00+00:00",
        "creation_timestamp": 1_705_314_600,
        "mailbox": {"id": 1, "email": "me@example.com"},
        "mailboxes": [{"id": 1, "email": "me@example.com"}],
        "latest_activity": null,
        "nb_block": 0,
        "nb_forward": 3,
        "nb_reply": 1,
        "note": null,
        "pinned": false
    })
}

pub fn contact_json(id: u64, email: &str) -> Value {
    json!({
        "id": id,
        "contact": email,
        "creation_date": "2024-02-01 08:00:00+00:00",
        "creation_timestamp": 1_706_774_400,
        "last_email_sent_date": null,
        "last_email_sent_timestamp": null,
        "reverse_alias": format!("\"{email}\" <ra+{id}@simplelogin.co>"),
        "block_forward": false
    })
}
