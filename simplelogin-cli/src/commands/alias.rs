use std::io::Write;

use anyhow::Result;
use serde_json::json;
use simplelogin_client::{Alias, AliasActivity, AliasFilter, AliasUpdate, Client, NewCustomAlias};

use crate::cli::{AliasCommand, AliasFilterArgs};
use crate::display::{Column, DisplayOptions, format};

const LIST_COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::email("Email"),
    Column::new("Status"),
    Column::new("Note"),
    Column::new("Created"),
    Column::new("Forwards"),
    Column::new("Replies"),
    Column::new("Blocks"),
];
const ACTIVITY_COLUMNS: &[Column] = &[
    Column::new("Action"),
    Column::email("From"),
    Column::email("To"),
    Column::new("Time"),
    Column::email("Reverse Alias"),
];
const SUFFIX_COLUMNS: &[Column] = &[
    Column::new("Suffix"),
    Column::new("Signed Suffix"),
    Column::new("Custom"),
    Column::new("Premium"),
];

impl From<AliasFilterArgs> for AliasFilter {
    fn from(args: AliasFilterArgs) -> Self {
        Self {
            pinned: args.pinned,
            disabled: args.disabled,
            enabled: args.enabled,
            query: args.query,
        }
    }
}

fn status(alias: &Alias) -> String {
    if alias.pinned {
        "📌 Pinned".to_string()
    } else if alias.enabled {
        "✓ Enabled".to_string()
    } else {
        "✗ Disabled".to_string()
    }
}

fn alias_row(alias: &Alias) -> Vec<String> {
    vec![
        alias.id.to_string(),
        format::text(&alias.email),
        status(alias),
        format::opt_text(alias.note.as_deref()),
        format::text(&alias.creation_date),
        alias.nb_forward.to_string(),
        alias.nb_reply.to_string(),
        alias.nb_block.to_string(),
    ]
}

fn activity_row(activity: &AliasActivity) -> Vec<String> {
    vec![
        format::text(&activity.action),
        format::text(&activity.from),
        format::text(&activity.to),
        format::timestamp(activity.timestamp),
        format::text(&activity.reverse_alias_address),
    ]
}

fn alias_fields(alias: &Alias) -> Vec<(&'static str, String)> {
    let mailboxes: Vec<&str> = alias.mailboxes.iter().map(|m| m.email.as_str()).collect();
    vec![
        ("ID", alias.id.to_string()),
        ("Email", alias.email.clone()),
        ("Name", format::opt_text(alias.name.as_deref())),
        ("Enabled", format::check(alias.enabled)),
        ("Pinned", format::check(alias.pinned)),
        ("Note", format::opt_text(alias.note.as_deref())),
        ("Created", format::timestamp(alias.creation_timestamp)),
        ("Mailboxes", format::text(&mailboxes.join(", "))),
        ("Forwards", alias.nb_forward.to_string()),
        ("Replies", alias.nb_reply.to_string()),
        ("Blocks", alias.nb_block.to_string()),
        (
            "Latest Activity",
            alias.latest_activity.as_ref().map_or_else(
                || "-".to_string(),
                |a| format!("{} at {}", a.action, format::timestamp(a.timestamp)),
            ),
        ),
    ]
}

pub async fn run(
    cmd: AliasCommand,
    client: &Client,
    display: &DisplayOptions,
    out: &mut dyn Write,
) -> Result<()> {
    match cmd {
        AliasCommand::Options { hostname } => {
            let options = client.alias_options(hostname.as_deref()).await?;
            if display.is_json() {
                return display.json(out, &options);
            }
            writeln!(out, "Can Create: {}", format::check(options.can_create))?;
            writeln!(out, "Prefix Suggestion: {}", format::text(&options.prefix_suggestion))?;
            writeln!(out)?;
            display.list(
                out,
                &options.suffixes,
                "suffixes",
                SUFFIX_COLUMNS,
                |s| {
                    vec![
                        s.suffix.clone(),
                        s.signed_suffix.clone(),
                        format::check(s.is_custom),
                        format::check(s.is_premium),
                    ]
                },
            )
        }

        AliasCommand::New {
            hostname,
            alias_prefix,
            signed_suffix,
            mailbox_ids,
            note,
            name,
        } => {
            let request = NewCustomAlias {
                alias_prefix,
                signed_suffix,
                mailbox_ids,
                note,
                name,
            };
            let alias = client
                .create_custom_alias(hostname.as_deref(), &request)
                .await?;
            display.record(out, &alias, &alias_fields(&alias))
        }

        AliasCommand::Random {
            hostname,
            mode,
            note,
        } => {
            let alias = client
                .create_random_alias(hostname.as_deref(), mode.map(Into::into), note.as_deref())
                .await?;
            display.record(out, &alias, &alias_fields(&alias))
        }

        AliasCommand::List { page, filter } => {
            let filter = AliasFilter::from(filter);
            let aliases = match page {
                Some(page) => client.list_aliases(&filter, page).await?,
                None => client.list_all_aliases(&filter).await?,
            };
            display.list(out, &aliases, "aliases", LIST_COLUMNS, alias_row)
        }

        AliasCommand::Get { id } => {
            let alias = client.get_alias(id).await?;
            display.record(out, &alias, &alias_fields(&alias))
        }

        AliasCommand::Delete { id } => {
            let deleted = client.delete_alias(id).await?;
            let message = if deleted {
                format!("Alias {id} deleted.")
            } else {
                format!("Alias {id} was not deleted.")
            };
            display.status(out, &json!({ "deleted": deleted }), &message)
        }

        AliasCommand::Toggle { id } => {
            let enabled = client.toggle_alias(id).await?;
            let state = if enabled { "enabled" } else { "disabled" };
            display.status(
                out,
                &json!({ "enabled": enabled }),
                &format!("Alias {id} is now {state}."),
            )
        }

        AliasCommand::Activities { id, page } => {
            let activities = match page {
                Some(page) => client.alias_activities(id, page).await?,
                None => client.all_alias_activities(id).await?,
            };
            display.list(out, &activities, "activities", ACTIVITY_COLUMNS, activity_row)
        }

        AliasCommand::Update {
            id,
            note,
            name,
            mailbox_ids,
            disable_pgp,
            pinned,
        } => {
            let update = AliasUpdate {
                note,
                mailbox_id: None,
                name,
                mailbox_ids,
                disable_pgp,
                pinned,
            };
            client.update_alias(id, &update).await?;
            display.status(out, &json!({ "ok": true }), &format!("Alias {id} updated."))
        }
    }
}
