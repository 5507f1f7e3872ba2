// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory network adapters

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeInventoryAdapter, InventoryCall};

use async_trait::async_trait;
use courier_core::{InventorySnapshot, ItemId, ItemStack};
use thiserror::Error;

/// Errors from inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("inventory unavailable: {0}")]
    Unavailable(String),
    #[error("inventory rejected request: {0}")]
    Rejected(String),
    #[error("malformed inventory response: {0}")]
    Malformed(String),
}

/// Adapter for the item storage and autocrafting network
#[async_trait]
pub trait InventoryAdapter: Clone + Send + Sync + 'static {
    /// Every stack currently stored, qualified variants included
    async fn stacks(&self) -> Result<Vec<ItemStack>, InventoryError>;

    /// Snapshot of plain (unqualified) stock
    async fn snapshot(&self) -> Result<InventorySnapshot, InventoryError> {
        Ok(InventorySnapshot::from_stacks(self.stacks().await?))
    }

    /// Move up to `amount` units to the intake point, returning what actually moved
    ///
    /// Partial moves are not errors.
    async fn transfer(&self, item_id: &ItemId, amount: u64) -> Result<u64, InventoryError>;

    /// Whether the backend can report in-progress crafting jobs
    ///
    /// Read once when the fulfillment controller is built.
    fn supports_crafting_query(&self) -> bool {
        false
    }

    /// Whether a crafting job for this item is running
    async fn is_crafting(&self, _item_id: &ItemId) -> Result<bool, InventoryError> {
        Ok(false)
    }

    /// Place a crafting order; `Ok(false)` when no pattern exists or the
    /// backend declines
    async fn craft(&self, item_id: &ItemId, amount: u64) -> Result<bool, InventoryError>;
}
