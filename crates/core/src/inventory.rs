// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time view of the inventory network

use crate::item::{ItemId, ItemStack};
use std::collections::BTreeMap;

/// Available amounts per item, rebuilt once per scan
///
/// Identity-qualified stacks are dropped on construction so that an
/// enchanted pickaxe never satisfies a request for a plain one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySnapshot {
    amounts: BTreeMap<ItemId, u64>,
}

impl InventorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw stacks, summing duplicates and skipping qualified ones
    pub fn from_stacks<I>(stacks: I) -> Self
    where
        I: IntoIterator<Item = ItemStack>,
    {
        let mut amounts = BTreeMap::new();
        for stack in stacks {
            if stack.is_qualified() || stack.amount == 0 {
                continue;
            }
            let entry: &mut u64 = amounts.entry(stack.item_id).or_default();
            *entry = entry.saturating_add(stack.amount);
        }
        Self { amounts }
    }

    /// Amount available for an item, zero if unknown
    pub fn available(&self, item_id: &ItemId) -> u64 {
        self.amounts.get(item_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u64)> {
        self.amounts.iter().map(|(id, amount)| (id, *amount))
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
