use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context as _, Result, bail};
use serde_json::json;

use super::Context;
use crate::cli::AuthCommand;
use crate::credentials::{CredentialError, CredentialStore};

async fn save_key(store: &Arc<CredentialStore>, api_key: String) -> Result<&'static str> {
    let store = Arc::clone(store);
    let backend = tokio::task::spawn_blocking(move || store.save(&api_key))
        .await
        .context("credential store panicked")??;
    Ok(backend)
}

/// First line of `input`, without its line ending.
fn read_password(input: &mut dyn BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read password")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("password must not be empty (use --password, SIMPLELOGIN_PASSWORD or stdin)");
    }
    Ok(password)
}

async fn password_from_stdin() -> Result<String> {
    eprint!("Password: ");
    tokio::task::spawn_blocking(|| read_password(&mut std::io::stdin().lock()))
        .await
        .context("password prompt panicked")?
}

pub async fn run(cmd: AuthCommand, ctx: &Context, out: &mut dyn Write) -> Result<()> {
    match cmd {
        AuthCommand::SetKey { key } => {
            let key = key.trim().to_string();
            if key.is_empty() {
                bail!("API key must not be empty");
            }
            let backend = save_key(&ctx.credentials, key).await?;
            ctx.display.status(
                out,
                &json!({ "saved": true, "backend": backend }),
                &format!("API key saved ({backend})."),
            )
        }

        AuthCommand::Login {
            email,
            password,
            device,
        } => {
            let password = match password {
                Some(password) => password,
                None => password_from_stdin().await?,
            };
            let api_key = simplelogin_client::login(
                &ctx.config.api_url,
                &email,
                &password,
                &device,
                &ctx.cancel,
            )
            .await?;
            let backend = save_key(&ctx.credentials, api_key).await?;
            ctx.display.status(
                out,
                &json!({ "saved": true, "backend": backend }),
                &format!("Logged in as {email}; API key saved ({backend})."),
            )
        }

        AuthCommand::Logout => {
            let store = Arc::clone(&ctx.credentials);
            let result = tokio::task::spawn_blocking(move || store.delete())
                .await
                .context("credential store panicked")?;
            match result {
                Ok(()) => ctx
                    .display
                    .status(out, &json!({ "deleted": true }), "API key removed."),
                Err(CredentialError::NotFound) => ctx.display.status(
                    out,
                    &json!({ "deleted": false }),
                    "No API key was stored.",
                ),
                Err(e) => Err(e.into()),
            }
        }
    }
}
