//! Alias endpoints

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http_client::HttpMethod;
use crate::pagination::collect_all_pages;
use crate::types::{
    ActivityPage, Alias, AliasActivity, AliasFilter, AliasOptions, AliasPage, AliasToggleResponse,
    AliasUpdate, DeletedResponse, NewCustomAlias, RandomAliasMode,
};
use crate::utils::query::Query;

#[derive(serde::Serialize)]
struct RandomAliasBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

impl Client {
    /// `GET /v5/alias/options`
    pub async fn alias_options(&self, hostname: Option<&str>) -> Result<AliasOptions> {
        let mut query = Query::new();
        query.push_opt("hostname", hostname);
        self.get(&query.apply("/v5/alias/options")).await
    }

    /// `POST /v3/alias/custom/new`
    pub async fn create_custom_alias(
        &self,
        hostname: Option<&str>,
        alias: &NewCustomAlias,
    ) -> Result<Alias> {
        if alias.alias_prefix.trim().is_empty() {
            return Err(Error::validation("alias_prefix", "alias prefix is required"));
        }
        if alias.signed_suffix.trim().is_empty() {
            return Err(Error::validation("signed_suffix", "signed suffix is required"));
        }
        if alias.mailbox_ids.is_empty() {
            return Err(Error::validation(
                "mailbox_ids",
                "at least one mailbox id is required",
            ));
        }

        let mut query = Query::new();
        query.push_opt("hostname", hostname);
        self.send_json(HttpMethod::Post, &query.apply("/v3/alias/custom/new"), alias)
            .await
    }

    /// `POST /alias/random/new`
    pub async fn create_random_alias(
        &self,
        hostname: Option<&str>,
        mode: Option<RandomAliasMode>,
        note: Option<&str>,
    ) -> Result<Alias> {
        let mut query = Query::new();
        query
            .push_opt("hostname", hostname)
            .push_opt("mode", mode.map(RandomAliasMode::as_str));

        self.send_json(
            HttpMethod::Post,
            &query.apply("/alias/random/new"),
            &RandomAliasBody { note },
        )
        .await
    }

    /// One page of aliases (`GET /v2/aliases?page_id=N`).
    pub async fn list_aliases(&self, filter: &AliasFilter, page_id: u32) -> Result<Vec<Alias>> {
        if filter.exclusive_flags_set() > 1 {
            return Err(Error::validation(
                "filter",
                "pinned, disabled and enabled are mutually exclusive",
            ));
        }

        let mut query = Query::new();
        query
            .push_flag("pinned", filter.pinned)
            .push_flag("disabled", filter.disabled)
            .push_flag("enabled", filter.enabled)
            .push_opt("query", filter.query.as_deref());

        let path = query.apply(&format!("/v2/aliases?page_id={page_id}"));
        let page: AliasPage = self.get(&path).await?;
        Ok(page.aliases)
    }

    /// Every alias matching `filter`, across all pages.
    pub async fn list_all_aliases(&self, filter: &AliasFilter) -> Result<Vec<Alias>> {
        collect_all_pages(|page_id| self.list_aliases(filter, page_id)).await
    }

    /// `GET /aliases/{id}`
    pub async fn get_alias(&self, alias_id: u64) -> Result<Alias> {
        self.get(&format!("/aliases/{alias_id}")).await
    }

    /// `DELETE /aliases/{id}`; returns the service's `deleted` flag.
    pub async fn delete_alias(&self, alias_id: u64) -> Result<bool> {
        let resp: DeletedResponse = self
            .send_bare(HttpMethod::Delete, &format!("/aliases/{alias_id}"))
            .await?;
        Ok(resp.deleted)
    }

    /// `POST /aliases/{id}/toggle`; returns the new `enabled` state.
    pub async fn toggle_alias(&self, alias_id: u64) -> Result<bool> {
        let resp: AliasToggleResponse = self
            .send_bare(HttpMethod::Post, &format!("/aliases/{alias_id}/toggle"))
            .await?;
        Ok(resp.enabled)
    }

    /// One page of activities for an alias.
    pub async fn alias_activities(&self, alias_id: u64, page_id: u32) -> Result<Vec<AliasActivity>> {
        let page: ActivityPage = self
            .get(&format!("/aliases/{alias_id}/activities?page_id={page_id}"))
            .await?;
        Ok(page.into_items())
    }

    /// Every activity of an alias, across all pages.
    pub async fn all_alias_activities(&self, alias_id: u64) -> Result<Vec<AliasActivity>> {
        collect_all_pages(|page_id| self.alias_activities(alias_id, page_id)).await
    }

    /// `PATCH /aliases/{id}` with only the fields set in `update`.
    pub async fn update_alias(&self, alias_id: u64, update: &AliasUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(Error::validation("update", "no update provided"));
        }
        self.send_json_empty(HttpMethod::Patch, &format!("/aliases/{alias_id}"), update)
            .await
    }
}
