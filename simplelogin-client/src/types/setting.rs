use serde::{Deserialize, Serialize};

/// Account-level settings.
///
/// Values are kept as the service sends them; the typed enums below are only
/// used when writing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Setting {
    pub alias_generator: String,
    pub notification: bool,
    pub random_alias_default_domain: String,
    pub sender_format: String,
    pub random_alias_suffix: String,
}

/// A domain usable as the default for random aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingDomain {
    pub domain: String,
    #[serde(default)]
    pub is_custom: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasGenerator {
    Word,
    Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SenderFormat {
    At,
    A,
    NameOnly,
    AtOnly,
    NoName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomAliasSuffix {
    Word,
    RandomString,
}

/// Partial settings update; only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_generator: Option<AliasGenerator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_alias_default_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_format: Option<SenderFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_alias_suffix: Option<RandomAliasSuffix>,
}

impl SettingUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
