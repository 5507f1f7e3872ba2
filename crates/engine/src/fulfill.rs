// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-request fulfillment decisions

use courier_adapters::InventoryAdapter;
use courier_core::{
    Classifier, CooldownTracker, InventorySnapshot, ItemId, Outcome, Request, ScheduledVia,
    SkipReason,
};
use std::time::{Duration, Instant};

/// Resolves one request at a time against a fixed snapshot
///
/// Owns the cooldown state for the lifetime of the process.
pub struct FulfillmentController<I> {
    inventory: I,
    classifier: Classifier,
    cooldown: CooldownTracker,
    window: Duration,
    crafting_query: bool,
}

impl<I: InventoryAdapter> FulfillmentController<I> {
    pub fn new(inventory: I, classifier: Classifier, window: Duration) -> Self {
        let crafting_query = inventory.supports_crafting_query();
        Self {
            inventory,
            classifier,
            cooldown: CooldownTracker::new(),
            window,
            crafting_query,
        }
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    pub fn cooldown(&self) -> &CooldownTracker {
        &self.cooldown
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Decide and act on one request
    ///
    /// Adapter failures are folded into the outcome; nothing escapes.
    pub async fn resolve(
        &mut self,
        request: &Request,
        snapshot: &InventorySnapshot,
        now: Instant,
    ) -> Outcome {
        if let Some(reason) = self
            .classifier
            .classify(&request.display_name, &request.description)
        {
            return Outcome::Skip { reason };
        }
        let Some(item_id) = &request.item_id else {
            return Outcome::Skip {
                reason: SkipReason::NoItem,
            };
        };
        let Some(needed) = request.needed_units() else {
            return Outcome::Skip {
                reason: SkipReason::NothingNeeded,
            };
        };

        let provided = self.provide(item_id, needed, snapshot).await;
        if provided >= needed {
            return Outcome::Ok { provided };
        }

        if self.crafting_query {
            match self.inventory.is_crafting(item_id).await {
                Ok(true) => {
                    return Outcome::Scheduled {
                        provided,
                        via: ScheduledVia::AlreadyCrafting,
                    }
                }
                Ok(false) => {}
                Err(e) => tracing::warn!(item = %item_id, error = %e, "crafting query failed"),
            }
        }

        if !self.cooldown.can_schedule(item_id, now, self.window) {
            let remaining = self
                .cooldown
                .remaining(item_id, now, self.window)
                .unwrap_or_default();
            return Outcome::Wait {
                provided,
                remaining_secs: ceil_secs(remaining),
            };
        }

        match self.inventory.craft(item_id, needed).await {
            Ok(true) => {
                self.cooldown.mark_scheduled(item_id.clone(), now);
                Outcome::Scheduled {
                    provided,
                    via: ScheduledVia::Ordered,
                }
            }
            Ok(false) => Outcome::Fail {
                provided,
                reason: "no crafting pattern or order declined".to_string(),
            },
            Err(e) => {
                tracing::warn!(item = %item_id, error = %e, "craft order failed");
                Outcome::Fail {
                    provided,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Move what the snapshot says is on hand, up to `needed`
    async fn provide(&self, item_id: &ItemId, needed: u64, snapshot: &InventorySnapshot) -> u64 {
        let available = snapshot.available(item_id);
        if available == 0 {
            return 0;
        }
        match self.inventory.transfer(item_id, needed.min(available)).await {
            // Never credit more than was on hand before the transfer
            Ok(moved) => moved.min(available),
            Err(e) => {
                tracing::warn!(item = %item_id, error = %e, "transfer failed");
                0
            }
        }
    }
}

fn ceil_secs(d: Duration) -> u64 {
    d.as_secs() + u64::from(d.subsec_nanos() > 0)
}

#[cfg(test)]
#[path = "fulfill_tests.rs"]
mod tests;
