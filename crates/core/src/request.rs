// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work requests issued by the colony

use crate::item::ItemId;
use serde::{Deserialize, Serialize};

/// An open request for items to be delivered to a colony building
///
/// Requests are produced fresh by the colony on every scan and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Name shown to players, e.g. "Oak Planks" or "Iron Pickaxe"
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// Number of units still needed; zero or negative means nothing to do
    pub needed: i64,
    /// Human-readable destination (building or citizen)
    #[serde(default)]
    pub target: String,
    /// Absent for abstract requests the colony cannot pin to one item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<ItemId>,
}

impl Request {
    pub fn new(display_name: impl Into<String>, needed: i64) -> Self {
        Self {
            display_name: display_name.into(),
            description: String::new(),
            needed,
            target: String::new(),
            item_id: None,
        }
    }

    pub fn with_item(mut self, item_id: impl Into<ItemId>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Units needed as an unsigned amount, if any
    pub fn needed_units(&self) -> Option<u64> {
        u64::try_from(self.needed).ok().filter(|n| *n > 0)
    }
}
