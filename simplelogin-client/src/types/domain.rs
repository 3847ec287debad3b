use serde::{Deserialize, Serialize};

use super::mailbox::Mailbox;

/// A custom domain owned by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDomain {
    pub id: u64,
    pub domain_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub catch_all: bool,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub creation_timestamp: i64,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub mailboxes: Vec<Mailbox>,
    #[serde(default)]
    pub nb_alias: u64,
    #[serde(default)]
    pub random_prefix_generation: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomDomainList {
    #[serde(default)]
    pub custom_domains: Vec<CustomDomain>,
}

/// Partial domain update; only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_prefix_generation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailbox_ids: Option<Vec<u64>>,
}

impl DomainUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// An alias deleted from a custom domain, kept in its trash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashAlias {
    pub alias: String,
    #[serde(default)]
    pub deletion_timestamp: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrashList {
    #[serde(default)]
    pub aliases: Vec<TrashAlias>,
}
