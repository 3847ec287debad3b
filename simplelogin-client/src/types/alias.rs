use serde::{Deserialize, Serialize};

use super::mailbox::Mailbox;

/// Options for creating an alias: whether the user may create one, a suggested
/// prefix and the signed suffixes to choose from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasOptions {
    pub can_create: bool,
    #[serde(default)]
    pub prefix_suggestion: String,
    #[serde(default)]
    pub suffixes: Vec<AliasSuffix>,
}

/// One selectable alias suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasSuffix {
    /// Tamper-evident token to send back when creating a custom alias.
    pub signed_suffix: String,
    pub suffix: String,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub is_premium: bool,
}

/// Body of `POST /v3/alias/custom/new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomAlias {
    pub alias_prefix: String,
    pub signed_suffix: String,
    pub mailbox_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// How the service generates a random alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomAliasMode {
    Uuid,
    Word,
}

impl RandomAliasMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Word => "word",
        }
    }
}

/// An alias record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub enabled: bool,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub creation_timestamp: i64,
    #[serde(default)]
    pub mailbox: Option<Mailbox>,
    #[serde(default)]
    pub mailboxes: Vec<Mailbox>,
    #[serde(default)]
    pub latest_activity: Option<AliasActivity>,
    #[serde(default)]
    pub nb_block: u64,
    #[serde(default)]
    pub nb_forward: u64,
    #[serde(default)]
    pub nb_reply: u64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub pinned: bool,
}

/// Filters for alias listing.
///
/// `pinned`, `disabled` and `enabled` are mutually exclusive on the service
/// side; at most one may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasFilter {
    pub pinned: bool,
    pub disabled: bool,
    pub enabled: bool,
    pub query: Option<String>,
}

impl AliasFilter {
    pub(crate) fn exclusive_flags_set(&self) -> usize {
        [self.pinned, self.disabled, self.enabled]
            .iter()
            .filter(|f| **f)
            .count()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AliasPage {
    #[serde(default)]
    pub aliases: Vec<Alias>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeletedResponse {
    pub deleted: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AliasToggleResponse {
    pub enabled: bool,
}

/// One forward/reply/block event on an alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasActivity {
    pub action: String,
    pub from: String,
    pub to: String,
    pub timestamp: i64,
    pub reverse_alias: String,
    pub reverse_alias_address: String,
}

/// Activities arrive either bare or wrapped depending on the API version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ActivityPage {
    Wrapped { activities: Vec<AliasActivity> },
    Bare(Vec<AliasActivity>),
}

impl ActivityPage {
    pub fn into_items(self) -> Vec<AliasActivity> {
        match self {
            Self::Wrapped { activities } => activities,
            Self::Bare(items) => items,
        }
    }
}

/// Partial alias update; only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailbox_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailbox_ids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_pgp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

impl AliasUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
