// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine

use courier_adapters::{ColonyError, InventoryError};
use thiserror::Error;

/// Errors that abort a scan or a command
///
/// Per-request failures never surface here; they become outcomes.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("request fetch failed: {0}")]
    Requests(#[from] ColonyError),
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),
    #[error("invalid amount: {0}")]
    InvalidAmount(u64),
}
