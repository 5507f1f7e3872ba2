// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manual scan trigger

use anyhow::Result;

use crate::client::DaemonClient;
use crate::output::{self, OutputFormat};

pub async fn handle(client: &DaemonClient, format: OutputFormat) -> Result<()> {
    let summary = client.scan().await?;
    match format {
        OutputFormat::Text => println!("Scanned ({}): {}", summary.trigger, summary.counts),
        OutputFormat::Json => output::print(&summary.counts, format),
    }
    Ok(())
}
