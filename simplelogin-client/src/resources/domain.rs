//! Custom domain endpoints

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http_client::HttpMethod;
use crate::types::{CustomDomain, CustomDomainList, DomainUpdate, TrashAlias, TrashList};

impl Client {
    pub async fn custom_domains(&self) -> Result<Vec<CustomDomain>> {
        let list: CustomDomainList = self.get("/custom_domains").await?;
        Ok(list.custom_domains)
    }

    /// `PATCH /custom_domains/{id}`; returns the updated domain.
    pub async fn update_custom_domain(
        &self,
        domain_id: u64,
        update: &DomainUpdate,
    ) -> Result<CustomDomain> {
        if update.is_empty() {
            return Err(Error::validation("update", "no update provided"));
        }
        self.send_json(
            HttpMethod::Patch,
            &format!("/custom_domains/{domain_id}"),
            update,
        )
        .await
    }

    /// Aliases deleted from a domain.
    pub async fn domain_trash(&self, domain_id: u64) -> Result<Vec<TrashAlias>> {
        let list: TrashList = self
            .get(&format!("/custom_domains/{domain_id}/trash"))
            .await?;
        Ok(list.aliases)
    }
}
