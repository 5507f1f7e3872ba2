// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain terminal output

use super::{DisplayAdapter, DisplayError};
use async_trait::async_trait;
use courier_core::Report;
use std::io::Write;

/// Writes reports to stdout, keeping the status line in place with `\r`
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }

    fn status_line(&self, text: &str) -> Result<(), DisplayError> {
        let mut out = std::io::stdout().lock();
        write!(out, "\r\x1b[2K{}", text)?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl DisplayAdapter for TerminalDisplay {
    async fn render_report(&self, report: &Report) -> Result<(), DisplayError> {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        let mut out = std::io::stdout().lock();
        writeln!(out, "\r\x1b[2K--- {} ---", stamp)?;
        write!(out, "{}", report)?;
        out.flush()?;
        Ok(())
    }

    async fn render_paused(&self) -> Result<(), DisplayError> {
        self.status_line("Paused for the night")
    }

    async fn render_countdown(&self, remaining: u32) -> Result<(), DisplayError> {
        self.status_line(&format!("Next scan in {}", remaining))
    }
}
