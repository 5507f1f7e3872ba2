// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! courier - colony request courier CLI

mod client;
mod commands;
mod completions;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{daemon, once, report, scan, send, status};
use std::path::PathBuf;

use crate::client::{find_project_root, DaemonClient};
use crate::completions::CompletionsArgs;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "courier",
    version,
    about = "Courier - fulfils colony requests from storage"
)]
struct Cli {
    /// Project root directory
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trigger a scan now
    Scan,
    /// Send items straight to the intake point
    Send(send::SendArgs),
    /// Show daemon status
    Status,
    /// Show the last rendered report
    Report,
    /// Run a single scan in-process, without the daemon
    Once(once::OnceArgs),
    /// Daemon management
    Daemon(daemon::DaemonArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format;

    let project_root = cli.project.map_or_else(find_project_root, Ok)?;

    // Commands that don't talk to a running daemon
    match cli.command {
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            return Ok(());
        }
        Commands::Once(args) => return once::handle(args, &project_root, format).await,
        Commands::Daemon(args) => return daemon::handle(args, project_root, format).await,
        _ => {}
    }

    let client = DaemonClient::connect_or_start(project_root).await?;

    match cli.command {
        Commands::Scan => scan::handle(&client, format).await?,
        Commands::Send(args) => send::handle(&client, args, format).await?,
        Commands::Status => status::handle(&client, format).await?,
        Commands::Report => report::handle(&client, format).await?,
        Commands::Once(_) | Commands::Daemon(_) | Commands::Completions(_) => {}
    }

    Ok(())
}
