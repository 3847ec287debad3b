use serde::{Deserialize, Serialize};

/// A correspondent of an alias, reachable through its reverse alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub contact: String,
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub creation_timestamp: i64,
    #[serde(default)]
    pub last_email_sent_date: Option<String>,
    #[serde(default)]
    pub last_email_sent_timestamp: Option<i64>,
    #[serde(default)]
    pub reverse_alias: String,
    #[serde(default)]
    pub block_forward: bool,
}

/// Result of creating a contact; `existed` is set when it was already there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedContact {
    #[serde(flatten)]
    pub contact: Contact,
    #[serde(default)]
    pub existed: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContactPage {
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContactBlockResponse {
    pub block_forward: bool,
}
