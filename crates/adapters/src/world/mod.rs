// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! World time-of-day adapters

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeWorldClock;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldClockError {
    #[error("world clock unavailable: {0}")]
    Unavailable(String),
}

/// Source of the in-game time of day
#[async_trait]
pub trait WorldClockAdapter: Clone + Send + Sync + 'static {
    /// Hour of the world day in `[0, 24)`
    async fn time_of_day(&self) -> Result<f64, WorldClockError>;
}
