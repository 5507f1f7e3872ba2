// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Last rendered report

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use crate::client::DaemonClient;
use crate::output::{self, OutputFormat};

#[derive(Serialize)]
struct ReportView {
    lines: Vec<String>,
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return writeln!(f, "No scan has run yet");
        }
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub async fn handle(client: &DaemonClient, format: OutputFormat) -> Result<()> {
    let lines = client.last_report().await?;
    output::print(&ReportView { lines }, format);
    Ok(())
}
