//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Check on and restart the Jellyfin container through its management API.
#[derive(Debug, Parser)]
#[command(name = "jellyrebootctl", version)]
pub struct Cli {
    /// Config file (defaults to ./jellyreboot.toml when present).
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum CliCommand {
    /// Log in and print the container status.
    Status,
    /// Log in, restart the container, then print the new status.
    Restart,
    /// Log in and keep printing the status until interrupted.
    Watch {
        /// Seconds between refreshes (overrides `watch.interval_secs`).
        #[arg(short, long)]
        interval: Option<u64>,
    },
}
