// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `afx` - CLI for tracking background autofix runs

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod color;
mod commands;
mod env;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use output::OutputFormat;

#[derive(Parser)]
#[command(name = "afx", about = "Track background autofix runs", styles = color::styles())]
struct Cli {
    /// Server base URL (env: AFX_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Bearer token for the server (env: AFX_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the latest run for an issue group
    Show {
        /// Issue group ID
        group: String,
    },
    /// Trigger a new run for an issue group
    Start {
        /// Issue group ID
        group: String,

        /// Event the analysis starts from
        #[arg(long)]
        event: String,

        /// Free-text instruction forwarded to the analysis
        instruction: Option<String>,
    },
    /// Watch a run until it reaches a terminal status
    Watch {
        /// Issue group ID
        group: String,

        /// Override the poll interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let interval_ms = match &cli.command {
        Command::Watch { interval_ms, .. } => *interval_ms,
        _ => None,
    };
    let client = env::build_client(cli.url, cli.token, interval_ms)?;

    match cli.command {
        Command::Show { group } => commands::show::handle(&client, &group, cli.format).await,
        Command::Start { group, event, instruction } => {
            commands::start::handle(&client, &group, &event, instruction.as_deref()).await
        }
        Command::Watch { group, .. } => commands::watch::handle(&client, &group).await,
    }
}
