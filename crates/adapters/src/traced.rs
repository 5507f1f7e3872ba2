// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::colony::{ColonyAdapter, ColonyError};
use crate::inventory::{InventoryAdapter, InventoryError};
use async_trait::async_trait;
use courier_core::{ItemId, ItemStack, Request};
use std::time::Instant;
use tracing::Instrument;

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Wrapper that adds tracing to any ColonyAdapter
#[derive(Clone)]
pub struct TracedColonyAdapter<C> {
    inner: C,
}

impl<C> TracedColonyAdapter<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: ColonyAdapter> ColonyAdapter for TracedColonyAdapter<C> {
    async fn open_requests(&self) -> Result<Vec<Request>, ColonyError> {
        let span = tracing::debug_span!("colony.open_requests");
        async {
            let start = Instant::now();
            let result = self.inner.open_requests().await;
            match &result {
                Ok(requests) => tracing::debug!(
                    count = requests.len(),
                    elapsed_ms = elapsed_ms(start),
                    "fetched requests"
                ),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed_ms(start),
                    error = %e,
                    "request fetch failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any InventoryAdapter
#[derive(Clone)]
pub struct TracedInventoryAdapter<I> {
    inner: I,
}

impl<I> TracedInventoryAdapter<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<I: InventoryAdapter> InventoryAdapter for TracedInventoryAdapter<I> {
    async fn stacks(&self) -> Result<Vec<ItemStack>, InventoryError> {
        let span = tracing::debug_span!("inventory.stacks");
        async {
            let start = Instant::now();
            let result = self.inner.stacks().await;
            match &result {
                Ok(stacks) => tracing::debug!(
                    count = stacks.len(),
                    elapsed_ms = elapsed_ms(start),
                    "listed stacks"
                ),
                Err(e) => tracing::warn!(error = %e, "stack listing failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn transfer(&self, item_id: &ItemId, amount: u64) -> Result<u64, InventoryError> {
        let span = tracing::info_span!("inventory.transfer", item = %item_id, amount);
        async {
            // Precondition: nothing to move
            if amount == 0 {
                tracing::debug!("zero amount, skipping");
                return Ok(0);
            }

            let start = Instant::now();
            let result = self.inner.transfer(item_id, amount).await;
            match &result {
                Ok(moved) if *moved < amount => tracing::info!(
                    moved,
                    elapsed_ms = elapsed_ms(start),
                    "partial transfer"
                ),
                Ok(moved) => {
                    tracing::info!(moved, elapsed_ms = elapsed_ms(start), "transferred")
                }
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed_ms(start),
                    error = %e,
                    "transfer failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }

    fn supports_crafting_query(&self) -> bool {
        self.inner.supports_crafting_query()
    }

    async fn is_crafting(&self, item_id: &ItemId) -> Result<bool, InventoryError> {
        let result = self.inner.is_crafting(item_id).await;
        tracing::trace!(item = %item_id, crafting = ?result.as_ref().ok(), "checked");
        result
    }

    async fn craft(&self, item_id: &ItemId, amount: u64) -> Result<bool, InventoryError> {
        let span = tracing::info_span!("inventory.craft", item = %item_id, amount);
        async {
            let start = Instant::now();
            let result = self.inner.craft(item_id, amount).await;
            match &result {
                Ok(true) => tracing::info!(elapsed_ms = elapsed_ms(start), "craft ordered"),
                Ok(false) => tracing::warn!(elapsed_ms = elapsed_ms(start), "craft rejected"),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed_ms(start),
                    error = %e,
                    "craft failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
