use std::io::Write;

use anyhow::Result;
use serde_json::json;
use simplelogin_client::{Client, Mailbox};

use crate::cli::MailboxCommand;
use crate::display::{Column, DisplayOptions, format};

const COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::email("Email"),
    Column::new("Default"),
    Column::new("Verified"),
    Column::new("Aliases"),
    Column::new("Created"),
];

fn mailbox_row(mailbox: &Mailbox) -> Vec<String> {
    vec![
        mailbox.id.to_string(),
        format::text(&mailbox.email),
        format::check(mailbox.default),
        format::check(mailbox.verified),
        mailbox.nb_alias.to_string(),
        format::timestamp(mailbox.creation_timestamp),
    ]
}

pub async fn run(
    cmd: MailboxCommand,
    client: &Client,
    display: &DisplayOptions,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        MailboxCommand::List => {
            let mailboxes = client.mailboxes().await?;
            display.list(out, &mailboxes, "mailboxes", COLUMNS, mailbox_row)
        }

        MailboxCommand::Create { email } => {
            let created = client.create_mailbox(&email).await?;
            display.record(
                out,
                &created,
                &[
                    ("ID", created.id.to_string()),
                    ("Email", created.email.clone()),
                    ("Verified", format::check(created.verified)),
                ],
            )?;
            if !display.is_json() && !created.verified {
                writeln!(out, "\nCheck {} for a verification email.", created.email)?;
            }
            Ok(())
        }

        MailboxCommand::Delete {
            id,
            transfer_aliases_to,
        } => {
            client.delete_mailbox(id, transfer_aliases_to).await?;
            let message = match transfer_aliases_to {
                Some(target) => format!("Mailbox {id} deleted; aliases moved to mailbox {target}."),
                None => format!("Mailbox {id} deleted."),
            };
            display.status(out, &json!({ "deleted": true }), &message)
        }
    }
}
