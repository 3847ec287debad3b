use serde::{Deserialize, Serialize};

/// Account-wide counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub nb_alias: u64,
    pub nb_block: u64,
    pub nb_forward: u64,
    pub nb_reply: u64,
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub in_trial: bool,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub max_alias_free_plan: u64,
}

/// Partial profile update; only fields that are `Some` are sent.
///
/// `profile_picture` is a base64-encoded image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserInfoUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub device: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub api_key: Option<String>,
    #[serde(default)]
    pub mfa_enabled: bool,
}
