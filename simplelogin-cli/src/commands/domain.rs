use std::io::Write;

use anyhow::Result;
use simplelogin_client::{Client, CustomDomain, DomainUpdate};

use crate::cli::DomainCommand;
use crate::display::{Column, DisplayOptions, format};

const COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::new("Domain"),
    Column::new("Verified"),
    Column::new("Catch All"),
    Column::new("Aliases"),
    Column::new("Created"),
];
const TRASH_COLUMNS: &[Column] = &[Column::email("Alias"), Column::new("Deleted")];

fn domain_row(domain: &CustomDomain) -> Vec<String> {
    vec![
        domain.id.to_string(),
        domain.domain_name.clone(),
        format::check(domain.is_verified),
        format::check(domain.catch_all),
        domain.nb_alias.to_string(),
        format::timestamp(domain.creation_timestamp),
    ]
}

fn domain_fields(domain: &CustomDomain) -> Vec<(&'static str, String)> {
    let mailbox_ids: Vec<u64> = domain.mailboxes.iter().map(|m| m.id).collect();
    vec![
        ("ID", domain.id.to_string()),
        ("Domain", domain.domain_name.clone()),
        ("Name", format::opt_text(domain.name.as_deref())),
        ("Verified", format::check(domain.is_verified)),
        ("Catch All", format::check(domain.catch_all)),
        (
            "Random Prefix Generation",
            format::check(domain.random_prefix_generation),
        ),
        ("Mailbox IDs", format::ids(&mailbox_ids)),
        ("Aliases", domain.nb_alias.to_string()),
    ]
}

pub async fn run(
    cmd: DomainCommand,
    client: &Client,
    display: &DisplayOptions,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        DomainCommand::List => {
            let domains = client.custom_domains().await?;
            display.list(out, &domains, "domains", COLUMNS, domain_row)
        }

        DomainCommand::Update {
            id,
            catch_all,
            random_prefix_generation,
            name,
            mailbox_ids,
        } => {
            let update = DomainUpdate {
                catch_all,
                random_prefix_generation,
                name,
                mailbox_ids,
            };
            let domain = client.update_custom_domain(id, &update).await?;
            display.record(out, &domain, &domain_fields(&domain))
        }

        DomainCommand::Trash { id } => {
            let trash = client.domain_trash(id).await?;
            display.list(out, &trash, "deleted aliases", TRASH_COLUMNS, |t| {
                vec![format::text(&t.alias), format::timestamp(t.deletion_timestamp)]
            })
        }
    }
}
