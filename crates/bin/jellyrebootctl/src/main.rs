//! # jellyrebootctl — terminal front-end
//!
//! Composition root that wires the session client to a transport and a UI.
//!
//! ## Responsibilities
//! - Parse the command line and configuration (file + env vars)
//! - Initialise logging
//! - Construct the reqwest transport and the terminal UI (adapters)
//! - Construct the session client, log in, and run the requested command
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no session logic belongs here.

mod cli;
mod config;
mod terminal;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use jellyreboot_adapter_http_reqwest::ReqwestTransport;
use jellyreboot_app::ports::{HttpTransport, Ui};
use jellyreboot_app::services::session::{RestartOutcome, SessionClient};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, CliCommand};
use crate::config::Config;
use crate::terminal::TerminalUi;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let transport = ReqwestTransport::new(&config.server).context("failed to create HTTP client")?;
    let client = SessionClient::new(transport, TerminalUi::stdout());
    client.initialize();

    tracing::info!(base_url = %config.server.base_url, "connecting");
    if client.login(config.credentials.login_form()).await.is_err() {
        return Ok(ExitCode::FAILURE);
    }

    let succeeded = match cli.command {
        // login already fetched and printed the status
        CliCommand::Status => true,
        CliCommand::Restart => !matches!(
            client.restart_container().await,
            RestartOutcome::Failed(_)
        ),
        CliCommand::Watch { interval } => {
            let secs = interval.unwrap_or(config.watch.interval_secs).max(1);
            watch(&client, Duration::from_secs(secs)).await
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Refresh the status every `period` until Ctrl-C or until the session is
/// lost. Returns `false` when the session ended on its own.
async fn watch<T: HttpTransport, U: Ui>(client: &SessionClient<T, U>, period: Duration) -> bool {
    let mut ticker = tokio::time::interval(period);
    // the first tick completes immediately and login has just fetched
    ticker.tick().await;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Err(err) = client.fetch_status().await {
                    if err.is_auth() {
                        return false;
                    }
                }
            }
            _ = &mut shutdown => {
                tracing::info!("interrupted, stopping watch");
                return true;
            }
        }
    }
}
