// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Colony request source adapters

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeColonyAdapter;

use async_trait::async_trait;
use courier_core::Request;
use thiserror::Error;

/// Errors from the colony request source
#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("colony unavailable: {0}")]
    Unavailable(String),
    #[error("malformed request list: {0}")]
    Malformed(String),
}

/// Source of the colony's open work requests
#[async_trait]
pub trait ColonyAdapter: Clone + Send + Sync + 'static {
    /// All currently open requests; an empty list is a valid answer
    async fn open_requests(&self) -> Result<Vec<Request>, ColonyError>;
}
