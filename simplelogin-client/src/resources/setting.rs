//! Settings endpoints

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http_client::HttpMethod;
use crate::types::{Setting, SettingDomain, SettingUpdate};

impl Client {
    pub async fn setting(&self) -> Result<Setting> {
        self.get("/setting").await
    }

    /// `PUT /setting` with only the fields set in `update`.
    ///
    /// A new default random-alias domain is checked against
    /// [`setting_domains`](Self::setting_domains) first, which costs one extra
    /// request.
    pub async fn update_setting(&self, update: &SettingUpdate) -> Result<Setting> {
        if update.is_empty() {
            return Err(Error::validation("update", "no update provided"));
        }

        if let Some(domain) = update.random_alias_default_domain.as_deref() {
            let available = self.setting_domains().await?;
            if !available.iter().any(|d| d.domain == domain) {
                let names: Vec<&str> = available.iter().map(|d| d.domain.as_str()).collect();
                return Err(Error::validation(
                    "random_alias_default_domain",
                    format!("must be one of: {}", names.join(", ")),
                ));
            }
        }

        self.send_json(HttpMethod::Put, "/setting", update).await
    }

    /// Domains usable as the default for random aliases.
    pub async fn setting_domains(&self) -> Result<Vec<SettingDomain>> {
        self.get("/v2/setting/domains").await
    }
}
