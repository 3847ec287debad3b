//! User, stats and login endpoints

use tokio_util::sync::CancellationToken;

use crate::client::Client;
use crate::decode::decode_json;
use crate::error::{Error, Result};
use crate::http_client::{ApiRequest, HttpMethod, ReqwestTransport};
use crate::retry::{RetryPolicy, send_with_retry};
use crate::types::{LoginRequest, LoginResponse, Stats, UserInfo, UserInfoUpdate};

impl Client {
    pub async fn stats(&self) -> Result<Stats> {
        self.get("/stats").await
    }

    pub async fn user_info(&self) -> Result<UserInfo> {
        self.get("/user_info").await
    }

    /// `PUT /user_info` with only the fields set in `update`.
    pub async fn update_user_info(&self, update: &UserInfoUpdate) -> Result<UserInfo> {
        if update.is_empty() {
            return Err(Error::validation("update", "no update provided"));
        }
        self.send_json(HttpMethod::Put, "/user_info", update).await
    }
}

/// Exchange email and password for an API key (`POST /auth/login`).
///
/// Accounts with MFA enabled cannot log in this way and get a
/// [`Error::Validation`]; create an API key in the web dashboard instead.
/// Cancelling `cancel` aborts the request and any rate-limit wait.
pub async fn login(
    base_url: &str,
    email: &str,
    password: &str,
    device: &str,
    cancel: &CancellationToken,
) -> Result<String> {
    if email.trim().is_empty() {
        return Err(Error::validation("email", "email is required"));
    }
    if password.is_empty() {
        return Err(Error::validation("password", "password is required"));
    }

    let transport = ReqwestTransport::unauthenticated(base_url)?;
    let request = ApiRequest::new(HttpMethod::Post, "/auth/login")?.json(&LoginRequest {
        email,
        password,
        device,
    })?;
    let response = send_with_retry(&transport, &request, &RetryPolicy::default(), cancel).await?;
    let resp: LoginResponse = decode_json(&response)?;

    if resp.mfa_enabled {
        return Err(Error::validation(
            "password",
            "account has MFA enabled; create an API key in the dashboard instead",
        ));
    }

    resp.api_key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| Error::Decode {
            detail: "login response has no api_key".to_string(),
        })
}
