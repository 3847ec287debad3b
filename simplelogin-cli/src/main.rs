//! simplelogin-cli entry point
//!
//! Parses arguments, wires logging, config and credentials together, runs one
//! command and maps the outcome to an exit code. All errors surface here.

mod cli;
mod commands;
mod config;
mod credentials;
mod display;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use commands::Context;
use config::AppConfig;
use credentials::CredentialStore;

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // stdout carries command output; diagnostics go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(filter)
        .init();
}

/// Cancel `token` on Ctrl-C so the in-flight request and any retry wait stop.
fn cancel_on_interrupt(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Interrupt received, cancelling");
            token.cancel();
        }
    });
}

async fn run(cli: Cli, cancel: CancellationToken) -> Result<()> {
    let config = AppConfig::resolve(cli.api_url.clone())?;
    let ctx = Context {
        config,
        display: cli.display_options(),
        cancel,
        credentials: Arc::new(CredentialStore::system()?),
    };

    let mut out = std::io::stdout();
    commands::run(cli.command, &ctx, &mut out).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_tracing(verbose);

    let cancel = CancellationToken::new();
    cancel_on_interrupt(cancel.clone());

    match run(cli, cancel).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:?}");
            eprintln!("Error: {e:#}");
            let caller_error = e
                .downcast_ref::<simplelogin_client::Error>()
                .is_some_and(simplelogin_client::Error::is_expected);
            if !caller_error && !verbose {
                eprintln!("Run again with --verbose for request details.");
            }
            ExitCode::FAILURE
        }
    }
}
