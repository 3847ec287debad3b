//! Command handlers, one module per resource.
//!
//! Handlers receive an explicit [`Context`] and write to the given sink; none
//! of them touch process-global state.

mod alias;
mod auth;
mod contact;
mod domain;
mod mailbox;
mod setting;
mod stats;
mod userinfo;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use simplelogin_client::Client;
use tokio_util::sync::CancellationToken;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::credentials::CredentialStore;
use crate::display::DisplayOptions;

/// Everything a handler needs, resolved once per invocation.
pub struct Context {
    pub config: AppConfig,
    pub display: DisplayOptions,
    pub cancel: CancellationToken,
    pub credentials: Arc<CredentialStore>,
}

impl Context {
    /// Client authenticated with the stored key.
    pub async fn client(&self) -> Result<Client> {
        let store = Arc::clone(&self.credentials);
        let api_key = tokio::task::spawn_blocking(move || store.load())
            .await
            .context("credential lookup panicked")??;

        let client = Client::builder()
            .api_key(api_key)
            .base_url(&self.config.api_url)
            .cancellation_token(self.cancel.clone())
            .build()?;
        Ok(client)
    }
}

pub async fn run(command: Command, ctx: &Context, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Auth(cmd) => auth::run(cmd, ctx, out).await,
        Command::Alias(cmd) => alias::run(cmd, &ctx.client().await?, &ctx.display, out).await,
        Command::Contact(cmd) => contact::run(cmd, &ctx.client().await?, &ctx.display, out).await,
        Command::Domain(cmd) => domain::run(cmd, &ctx.client().await?, &ctx.display, out).await,
        Command::Mailbox(cmd) => mailbox::run(cmd, &ctx.client().await?, &ctx.display, out).await,
        Command::Setting(cmd) => setting::run(cmd, &ctx.client().await?, &ctx.display, out).await,
        Command::Stats => stats::run(&ctx.client().await?, &ctx.display, out).await,
        Command::Userinfo(cmd) => {
            userinfo::run(cmd, &ctx.client().await?, &ctx.display, out).await
        }
    }
}
