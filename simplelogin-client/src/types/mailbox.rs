use serde::{Deserialize, Serialize};

/// A real address receiving forwarded mail.
///
/// Embedded references (inside aliases and domains) only carry `id` and
/// `email`; the remaining fields default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mailbox {
    pub id: u64,
    pub email: String,
    pub default: bool,
    pub creation_timestamp: i64,
    pub nb_alias: u64,
    pub verified: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MailboxList {
    #[serde(default)]
    pub mailboxes: Vec<Mailbox>,
}

/// Response of `POST /mailboxes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedMailbox {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub default: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct MailboxDelete {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_aliases_to: Option<u64>,
}
