// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op display for when no output is wanted.

use super::{DisplayAdapter, DisplayError};
use async_trait::async_trait;
use courier_core::Report;

#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpDisplay;

impl NoOpDisplay {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DisplayAdapter for NoOpDisplay {
    async fn render_report(&self, _report: &Report) -> Result<(), DisplayError> {
        Ok(())
    }

    async fn render_paused(&self) -> Result<(), DisplayError> {
        Ok(())
    }

    async fn render_countdown(&self, _remaining: u32) -> Result<(), DisplayError> {
        Ok(())
    }
}
