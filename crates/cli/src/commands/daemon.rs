// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle commands

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::client::{daemon_stop, ClientError, DaemonClient};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct DaemonArgs {
    #[command(subcommand)]
    pub command: DaemonCommand,
}

#[derive(Subcommand)]
pub enum DaemonCommand {
    /// Start the daemon (no-op if already running)
    Start,
    /// Stop the daemon
    Stop,
    /// Show whether the daemon is running
    Status,
}

pub async fn handle(args: DaemonArgs, project_root: PathBuf, format: OutputFormat) -> Result<()> {
    match args.command {
        DaemonCommand::Start => start(project_root).await,
        DaemonCommand::Stop => stop(project_root).await,
        DaemonCommand::Status => status(project_root, format).await,
    }
}

async fn start(project_root: PathBuf) -> Result<()> {
    if DaemonClient::connect(&project_root).is_ok() {
        println!("Daemon already running");
        return Ok(());
    }
    let client = DaemonClient::connect_or_start(project_root).await?;
    let version = client.hello().await?;
    println!("Daemon started (version {})", version);
    Ok(())
}

async fn stop(project_root: PathBuf) -> Result<()> {
    if daemon_stop(&project_root).await? {
        println!("Daemon stopped");
    } else {
        println!("Daemon not running");
    }
    Ok(())
}

async fn status(project_root: PathBuf, format: OutputFormat) -> Result<()> {
    let client = match DaemonClient::connect(&project_root) {
        Ok(client) => client,
        Err(ClientError::DaemonNotRunning) => {
            println!("Daemon not running");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let status = client.status().await?;
    output::print(&status, format);
    Ok(())
}
