//! Contact endpoints

use serde::Serialize;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http_client::HttpMethod;
use crate::pagination::collect_all_pages;
use crate::types::{Contact, ContactBlockResponse, ContactPage, CreatedContact, DeletedResponse};

#[derive(Serialize)]
struct NewContact<'a> {
    contact: &'a str,
}

impl Client {
    /// One page of an alias's contacts.
    pub async fn alias_contacts(&self, alias_id: u64, page_id: u32) -> Result<Vec<Contact>> {
        let page: ContactPage = self
            .get(&format!("/aliases/{alias_id}/contacts?page_id={page_id}"))
            .await?;
        Ok(page.contacts)
    }

    /// Every contact of an alias, across all pages.
    pub async fn all_alias_contacts(&self, alias_id: u64) -> Result<Vec<Contact>> {
        collect_all_pages(|page_id| self.alias_contacts(alias_id, page_id)).await
    }

    /// `POST /aliases/{id}/contacts`
    pub async fn create_contact(&self, alias_id: u64, contact: &str) -> Result<CreatedContact> {
        if contact.trim().is_empty() {
            return Err(Error::validation("contact", "contact email is required"));
        }
        self.send_json(
            HttpMethod::Post,
            &format!("/aliases/{alias_id}/contacts"),
            &NewContact { contact },
        )
        .await
    }

    /// `DELETE /contacts/{id}`
    pub async fn delete_contact(&self, contact_id: u64) -> Result<bool> {
        let resp: DeletedResponse = self
            .send_bare(HttpMethod::Delete, &format!("/contacts/{contact_id}"))
            .await?;
        Ok(resp.deleted)
    }

    /// `PATCH /contacts/{id}/toggle`; returns the new `block_forward` state.
    pub async fn toggle_contact(&self, contact_id: u64) -> Result<bool> {
        let resp: ContactBlockResponse = self
            .send_bare(HttpMethod::Patch, &format!("/contacts/{contact_id}/toggle"))
            .await?;
        Ok(resp.block_forward)
    }
}
