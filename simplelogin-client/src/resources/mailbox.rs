//! Mailbox endpoints

use serde::Serialize;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http_client::HttpMethod;
use crate::types::{CreatedMailbox, Mailbox, MailboxDelete, MailboxList};

#[derive(Serialize)]
struct NewMailbox<'a> {
    email: &'a str,
}

impl Client {
    pub async fn mailboxes(&self) -> Result<Vec<Mailbox>> {
        let list: MailboxList = self.get("/v2/mailboxes").await?;
        Ok(list.mailboxes)
    }

    /// `POST /mailboxes`. The new mailbox stays unverified until the user
    /// confirms the email the service sends.
    pub async fn create_mailbox(&self, email: &str) -> Result<CreatedMailbox> {
        if email.trim().is_empty() {
            return Err(Error::validation("email", "email is required"));
        }
        self.send_json(HttpMethod::Post, "/mailboxes", &NewMailbox { email })
            .await
    }

    /// `DELETE /mailboxes/{id}`, optionally moving its aliases to another mailbox.
    pub async fn delete_mailbox(&self, mailbox_id: u64, transfer_aliases_to: Option<u64>) -> Result<()> {
        if mailbox_id == 0 {
            return Err(Error::validation("mailbox_id", "mailbox ID must be positive"));
        }
        self.send_json_empty(
            HttpMethod::Delete,
            &format!("/mailboxes/{mailbox_id}"),
            &MailboxDelete {
                transfer_aliases_to,
            },
        )
        .await
    }
}
