// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reports written to the tracing log, for headless daemons

use super::{DisplayAdapter, DisplayError};
use async_trait::async_trait;
use courier_core::Report;

#[derive(Clone, Copy, Debug, Default)]
pub struct LogDisplay;

impl LogDisplay {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DisplayAdapter for LogDisplay {
    async fn render_report(&self, report: &Report) -> Result<(), DisplayError> {
        tracing::info!(
            summary = report.footer().unwrap_or_default(),
            hidden = report.hidden,
            "report"
        );
        for line in &report.lines {
            tracing::debug!(tone = ?line.tone, "{}", line.text);
        }
        Ok(())
    }

    async fn render_paused(&self) -> Result<(), DisplayError> {
        tracing::debug!("paused for the night");
        Ok(())
    }

    async fn render_countdown(&self, remaining: u32) -> Result<(), DisplayError> {
        tracing::trace!(remaining, "countdown");
        Ok(())
    }
}
