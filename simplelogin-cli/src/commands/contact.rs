use std::io::Write;

use anyhow::Result;
use serde_json::json;
use simplelogin_client::{Client, Contact};

use crate::cli::ContactCommand;
use crate::display::{Column, DisplayOptions, format};

const COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::email("Contact"),
    Column::new("Created"),
    Column::new("Last Email"),
    Column::email("Reverse Alias"),
    Column::new("Blocked"),
];

fn contact_row(contact: &Contact) -> Vec<String> {
    vec![
        contact.id.to_string(),
        format::text(&contact.contact),
        format::timestamp(contact.creation_timestamp),
        contact
            .last_email_sent_timestamp
            .map_or_else(|| "-".to_string(), format::timestamp),
        format::text(&contact.reverse_alias),
        format::check(contact.block_forward),
    ]
}

pub async fn run(
    cmd: ContactCommand,
    client: &Client,
    display: &DisplayOptions,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        ContactCommand::List { alias_id, page } => {
            let contacts = match page {
                Some(page) => client.alias_contacts(alias_id, page).await?,
                None => client.all_alias_contacts(alias_id).await?,
            };
            display.list(out, &contacts, "contacts", COLUMNS, contact_row)
        }

        ContactCommand::Create { alias_id, email } => {
            let created = client.create_contact(alias_id, &email).await?;
            if display.is_json() {
                return display.json(out, &created);
            }
            let verb = if created.existed { "already exists" } else { "created" };
            writeln!(out, "Contact {} {verb}.", created.contact.contact)?;
            writeln!(out, "Reverse Alias: {}", format::text(&created.contact.reverse_alias))?;
            Ok(())
        }

        ContactCommand::Delete { id } => {
            let deleted = client.delete_contact(id).await?;
            let message = if deleted {
                format!("Contact {id} deleted.")
            } else {
                format!("Contact {id} was not deleted.")
            };
            display.status(out, &json!({ "deleted": deleted }), &message)
        }

        ContactCommand::Block { id } => {
            let blocked = client.toggle_contact(id).await?;
            let state = if blocked { "blocked" } else { "unblocked" };
            display.status(
                out,
                &json!({ "block_forward": blocked }),
                &format!("Contact {id} is now {state}."),
            )
        }
    }
}
