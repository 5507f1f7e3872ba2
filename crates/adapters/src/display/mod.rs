// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status display adapters

mod log;
mod noop;
mod terminal;

pub use log::LogDisplay;
pub use noop::NoOpDisplay;
pub use terminal::TerminalDisplay;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DisplayCall, FakeDisplay};

use async_trait::async_trait;
use courier_core::{DisplayKind, Report};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("display write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Where scan reports and loop status are shown
#[async_trait]
pub trait DisplayAdapter: Clone + Send + Sync + 'static {
    async fn render_report(&self, report: &Report) -> Result<(), DisplayError>;

    /// Shown on every tick while scanning is suspended for the night
    async fn render_paused(&self) -> Result<(), DisplayError>;

    async fn render_countdown(&self, remaining: u32) -> Result<(), DisplayError>;
}

/// Display chosen by `[display] kind`
#[derive(Clone)]
pub enum ConfiguredDisplay {
    Terminal(TerminalDisplay),
    Log(LogDisplay),
    None(NoOpDisplay),
}

impl ConfiguredDisplay {
    pub fn new(kind: DisplayKind) -> Self {
        match kind {
            DisplayKind::Terminal => ConfiguredDisplay::Terminal(TerminalDisplay::new()),
            DisplayKind::Log => ConfiguredDisplay::Log(LogDisplay::new()),
            DisplayKind::None => ConfiguredDisplay::None(NoOpDisplay::new()),
        }
    }
}

#[async_trait]
impl DisplayAdapter for ConfiguredDisplay {
    async fn render_report(&self, report: &Report) -> Result<(), DisplayError> {
        match self {
            ConfiguredDisplay::Terminal(d) => d.render_report(report).await,
            ConfiguredDisplay::Log(d) => d.render_report(report).await,
            ConfiguredDisplay::None(d) => d.render_report(report).await,
        }
    }

    async fn render_paused(&self) -> Result<(), DisplayError> {
        match self {
            ConfiguredDisplay::Terminal(d) => d.render_paused().await,
            ConfiguredDisplay::Log(d) => d.render_paused().await,
            ConfiguredDisplay::None(d) => d.render_paused().await,
        }
    }

    async fn render_countdown(&self, remaining: u32) -> Result<(), DisplayError> {
        match self {
            ConfiguredDisplay::Terminal(d) => d.render_countdown(remaining).await,
            ConfiguredDisplay::Log(d) => d.render_countdown(remaining).await,
            ConfiguredDisplay::None(d) => d.render_countdown(remaining).await,
        }
    }
}
