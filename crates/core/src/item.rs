// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Item identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical item identifier, e.g. `minecraft:cobblestone`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One entry reported by the inventory network
///
/// `nbt` carries the identity qualifier (enchantments, damage, custom names).
/// Qualified stacks are never used to satisfy requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    #[serde(rename = "name")]
    pub item_id: ItemId,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbt: Option<String>,
}

impl ItemStack {
    pub fn new(item_id: impl Into<ItemId>, amount: u64) -> Self {
        Self {
            item_id: item_id.into(),
            amount,
            nbt: None,
        }
    }

    pub fn with_nbt(mut self, nbt: impl Into<String>) -> Self {
        self.nbt = Some(nbt.into());
        self
    }

    pub fn is_qualified(&self) -> bool {
        self.nbt.as_deref().is_some_and(|n| !n.is_empty())
    }
}
