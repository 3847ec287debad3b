//! Transport, retry and error mapping against a mock server.

mod common;

use std::time::{Duration, Instant};

use common::{TEST_KEY, client_for, client_with, fast_retry};
use serde_json::json;
use simplelogin_client::{
    ApiRequest, Client, Error, HttpMethod, RetryPolicy, TransportErrorKind,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn stats_body() -> serde_json::Value {
    json!({"nb_alias": 12, "nb_block": 1, "nb_forward": 40, "nb_reply": 5})
}

#[tokio::test]
async fn sends_authentication_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .and(header("Authentication", TEST_KEY))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .expect(1)
        .mount(&server)
        .await;

    let stats = require_ok!(client_for(&server).stats().await);
    assert_eq!(stats.nb_alias, 12);
    assert_eq!(stats.nb_forward, 40);
}

#[tokio::test]
async fn content_type_only_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/mailboxes"))
        .and(header("Content-Type", "application/json"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": 9, "email": "new@example.com", "verified": false})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    require_ok!(client.stats().await);
    let created = require_ok!(client.create_mailbox("new@example.com").await);
    assert_eq!(created.id, 9);
    assert!(!created.verified);

    let requests = recorded(&server).await;
    let get = requests
        .iter()
        .find(|r| r.method.as_str() == "GET")
        .map(|r| r.headers.contains_key("content-type"));
    assert_eq!(get, Some(false));
}

async fn recorded(server: &MockServer) -> Vec<wiremock::Request> {
    server.received_requests().await.unwrap_or_default()
}

#[tokio::test]
async fn unauthorized_without_message_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(path("/user_info"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let err = require_err!(client_for(&server).user_info().await);
    match err {
        Error::Authentication { message } => assert_eq!(message, "Invalid API key"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn structured_message_wins_over_status() {
    let server = MockServer::start().await;
    Mock::given(path("/user_info"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Wrong api key"})))
        .mount(&server)
        .await;

    let err = require_err!(client_for(&server).user_info().await);
    assert_eq!(err.to_string(), "API error (status 401): Wrong api key");
}

#[tokio::test]
async fn server_error_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(path("/stats"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = require_err!(client_for(&server).stats().await);
    match err {
        Error::Api {
            status_code,
            message,
            body,
        } => {
            assert_eq!(status_code, 503);
            assert!(message.is_none());
            assert_eq!(body, "<html>maintenance</html>");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = require_err!(client_for(&server).stats().await);
    assert!(matches!(err, Error::Decode { .. }), "unexpected error: {err:?}");
}

#[tokio::test]
async fn retries_rate_limit_then_succeeds() {
    let server = MockServer::start().await;
    Mock::given(path("/stats"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .expect(1)
        .mount(&server)
        .await;

    let stats = require_ok!(client_for(&server).stats().await);
    assert_eq!(stats.nb_alias, 12);
}

#[tokio::test]
async fn gives_up_after_three_rate_limited_attempts() {
    let server = MockServer::start().await;
    Mock::given(path("/stats"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(3)
        .mount(&server)
        .await;

    let err = require_err!(client_for(&server).stats().await);
    assert_eq!(err.transport_kind(), Some(TransportErrorKind::RetryExhausted));
    assert_eq!(err.to_string(), "max retries exceeded: still rate limited after 3 attempts");
}

#[tokio::test]
async fn disabled_retry_surfaces_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(path("/stats"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "42"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with(&server, RetryPolicy::disabled());
    let err = require_err!(client.stats().await);
    match err {
        Error::RateLimit {
            retry_after,
            message,
        } => {
            assert_eq!(retry_after, 42);
            assert_eq!(message, "Rate limit exceeded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_rate_limit_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(path("/stats"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    require_err!(client_for(&server).stats().await);
}

#[tokio::test]
async fn cancel_during_retry_wait_stops_promptly() {
    let server = MockServer::start().await;
    Mock::given(path("/stats"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = client.cancellation_token().clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let started = Instant::now();
    let err = require_err!(client.stats().await);
    assert_eq!(err.transport_kind(), Some(TransportErrorKind::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(path("/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(stats_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = require_ok!(
        Client::builder()
            .api_key(TEST_KEY)
            .base_url(server.uri())
            .retry_policy(fast_retry())
            .timeout(Duration::from_millis(200))
            .build()
    );
    let err = require_err!(client.stats().await);
    assert_eq!(err.transport_kind(), Some(TransportErrorKind::Timeout));
}

#[tokio::test]
async fn unreachable_host_is_connection_failure() {
    let client = require_ok!(
        Client::builder()
            .api_key(TEST_KEY)
            .base_url("http://127.0.0.1:1")
            .connect_timeout(Duration::from_secs(2))
            .build()
    );
    let err = require_err!(client.stats().await);
    assert_eq!(err.transport_kind(), Some(TransportErrorKind::ConnectionFailed));
}

#[tokio::test]
async fn execute_returns_raw_response() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/custom/thing"))
        .respond_with(ResponseTemplate::new(418).set_body_string("teapot"))
        .mount(&server)
        .await;

    let request = require_ok!(ApiRequest::new(HttpMethod::Put, "/custom/thing"));
    let response = require_ok!(client_for(&server).execute(&request).await);
    assert_eq!(response.status, 418);
    assert_eq!(response.body, "teapot");
}
