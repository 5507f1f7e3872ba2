// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-item throttle for crafting orders
//!
//! The crafting backend cannot always tell us whether an item is already in
//! production, so after placing an order the item is held back for a fixed
//! window. Entries are overwritten, never removed; the number of distinct
//! items a colony asks for stays small.

use crate::item::ItemId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct CooldownTracker {
    last_scheduled: HashMap<ItemId, Instant>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no order was recorded or the window has fully elapsed
    pub fn can_schedule(&self, item_id: &ItemId, now: Instant, window: Duration) -> bool {
        self.remaining(item_id, now, window).is_none()
    }

    /// Record an order placed at `now`
    pub fn mark_scheduled(&mut self, item_id: ItemId, now: Instant) {
        self.last_scheduled.insert(item_id, now);
    }

    /// Time left before another order may be placed, `None` when allowed
    pub fn remaining(&self, item_id: &ItemId, now: Instant, window: Duration) -> Option<Duration> {
        let last = self.last_scheduled.get(item_id)?;
        let elapsed = now.saturating_duration_since(*last);
        (elapsed < window).then(|| window - elapsed)
    }

    pub fn last_scheduled(&self, item_id: &ItemId) -> Option<Instant> {
        self.last_scheduled.get(item_id).copied()
    }

    /// Number of items that have ever been ordered
    pub fn len(&self) -> usize {
        self.last_scheduled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_scheduled.is_empty()
    }
}

#[cfg(test)]
#[path = "cooldown_tests.rs"]
mod tests;
