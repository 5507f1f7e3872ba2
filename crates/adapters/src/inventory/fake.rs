// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake inventory adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{InventoryAdapter, InventoryError};
use async_trait::async_trait;
use courier_core::{ItemId, ItemStack};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

/// Recorded inventory call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCall {
    Stacks,
    Transfer { item_id: ItemId, amount: u64 },
    IsCrafting { item_id: ItemId },
    Craft { item_id: ItemId, amount: u64 },
}

#[derive(Default)]
struct FakeInventoryState {
    stock: BTreeMap<ItemId, u64>,
    qualified: Vec<ItemStack>,
    patterns: BTreeSet<ItemId>,
    crafting: BTreeSet<ItemId>,
    transfer_cap: Option<u64>,
    fail_transfers: bool,
    fail_crafts: bool,
    fail_crafting_queries: bool,
    calls: Vec<InventoryCall>,
}

/// Fake inventory network with plain stock, known patterns and crafting jobs
#[derive(Clone, Default)]
pub struct FakeInventoryAdapter {
    inner: Arc<Mutex<FakeInventoryState>>,
    crafting_query: bool,
}

impl FakeInventoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the in-progress crafting query capability
    pub fn with_crafting_query(mut self) -> Self {
        self.crafting_query = true;
        self
    }

    pub fn with_stock(self, item_id: impl Into<ItemId>, amount: u64) -> Self {
        self.set_stock(item_id, amount);
        self
    }

    pub fn with_pattern(self, item_id: impl Into<ItemId>) -> Self {
        self.lock().patterns.insert(item_id.into());
        self
    }

    /// Add an identity-qualified stack that must never be used
    pub fn with_qualified(self, stack: ItemStack) -> Self {
        self.lock().qualified.push(stack);
        self
    }

    pub fn set_stock(&self, item_id: impl Into<ItemId>, amount: u64) {
        self.lock().stock.insert(item_id.into(), amount);
    }

    pub fn stock(&self, item_id: &ItemId) -> u64 {
        self.lock().stock.get(item_id).copied().unwrap_or(0)
    }

    pub fn set_crafting(&self, item_id: impl Into<ItemId>, running: bool) {
        let item_id = item_id.into();
        let mut inner = self.lock();
        if running {
            inner.crafting.insert(item_id);
        } else {
            inner.crafting.remove(&item_id);
        }
    }

    pub fn is_crafting_now(&self, item_id: &ItemId) -> bool {
        self.lock().crafting.contains(item_id)
    }

    /// Limit how much a single transfer can move (e.g. a full intake chest)
    pub fn cap_transfers(&self, cap: u64) {
        self.lock().transfer_cap = Some(cap);
    }

    pub fn fail_transfers(&self) {
        self.lock().fail_transfers = true;
    }

    pub fn fail_crafts(&self) {
        self.lock().fail_crafts = true;
    }

    pub fn fail_crafting_queries(&self) {
        self.lock().fail_crafting_queries = true;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<InventoryCall> {
        self.lock().calls.clone()
    }

    pub fn transfers(&self) -> Vec<(ItemId, u64)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                InventoryCall::Transfer { item_id, amount } => Some((item_id, amount)),
                _ => None,
            })
            .collect()
    }

    pub fn crafts(&self) -> Vec<(ItemId, u64)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                InventoryCall::Craft { item_id, amount } => Some((item_id, amount)),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeInventoryState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl InventoryAdapter for FakeInventoryAdapter {
    async fn stacks(&self) -> Result<Vec<ItemStack>, InventoryError> {
        let mut inner = self.lock();
        inner.calls.push(InventoryCall::Stacks);
        let mut stacks: Vec<ItemStack> = inner
            .stock
            .iter()
            .map(|(id, amount)| ItemStack::new(id.clone(), *amount))
            .collect();
        stacks.extend(inner.qualified.iter().cloned());
        Ok(stacks)
    }

    async fn transfer(&self, item_id: &ItemId, amount: u64) -> Result<u64, InventoryError> {
        let mut inner = self.lock();
        inner.calls.push(InventoryCall::Transfer {
            item_id: item_id.clone(),
            amount,
        });
        if inner.fail_transfers {
            return Err(InventoryError::Unavailable("intake not connected".into()));
        }
        let cap = inner.transfer_cap.unwrap_or(u64::MAX);
        let stored = inner.stock.get(item_id).copied().unwrap_or(0);
        let moved = amount.min(stored).min(cap);
        if moved > 0 {
            inner.stock.insert(item_id.clone(), stored - moved);
        }
        Ok(moved)
    }

    fn supports_crafting_query(&self) -> bool {
        self.crafting_query
    }

    async fn is_crafting(&self, item_id: &ItemId) -> Result<bool, InventoryError> {
        let mut inner = self.lock();
        inner.calls.push(InventoryCall::IsCrafting {
            item_id: item_id.clone(),
        });
        if inner.fail_crafting_queries {
            return Err(InventoryError::Unavailable("crafting monitor offline".into()));
        }
        Ok(inner.crafting.contains(item_id))
    }

    async fn craft(&self, item_id: &ItemId, amount: u64) -> Result<bool, InventoryError> {
        let mut inner = self.lock();
        inner.calls.push(InventoryCall::Craft {
            item_id: item_id.clone(),
            amount,
        });
        if inner.fail_crafts {
            return Err(InventoryError::Unavailable("crafting cpu offline".into()));
        }
        if !inner.patterns.contains(item_id) {
            return Ok(false);
        }
        inner.crafting.insert(item_id.clone());
        Ok(true)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
