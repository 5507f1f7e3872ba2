// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon status

use anyhow::Result;
use std::fmt;

use crate::client::{DaemonClient, DaemonStatus};
use crate::output::{self, OutputFormat};

impl fmt::Display for DaemonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: running")?;
        writeln!(f, "  Uptime: {}", format_uptime(self.uptime_secs))?;
        writeln!(f, "  State: {}", self.state)?;
        writeln!(f, "  Scans: {}", self.scans)?;
        match &self.last_scan {
            Some(summary) => writeln!(f, "  Last scan ({}): {}", summary.trigger, summary.counts),
            None => writeln!(f, "  Last scan: none"),
        }
    }
}

pub async fn handle(client: &DaemonClient, format: OutputFormat) -> Result<()> {
    let status = client.status().await?;
    output::print(&status, format);
    Ok(())
}

pub(crate) fn format_uptime(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
