// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! World document on disk standing in for a live game
//!
//! Transfers move plain stock into `delivered` and crafts append to
//! `crafting`; both rewrite the file so a later reader sees the result.

use super::entries::lenient_list;
use super::BridgeError;
use crate::colony::{ColonyAdapter, ColonyError};
use crate::inventory::{InventoryAdapter, InventoryError};
use crate::world::{WorldClockAdapter, WorldClockError};
use async_trait::async_trait;
use courier_core::{ItemId, ItemStack, Request};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

fn default_time() -> f64 {
    12.0
}

/// Contents of the world file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldDocument {
    /// Hour of the world day
    #[serde(default = "default_time")]
    pub time: f64,
    #[serde(default)]
    pub supports_crafting_query: bool,
    /// Entries that fail to decode are dropped on read and not written back
    #[serde(default, deserialize_with = "lenient_list")]
    pub requests: Vec<Request>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub items: Vec<ItemStack>,
    /// Items the autocrafting network has a pattern for
    #[serde(default)]
    pub patterns: Vec<ItemId>,
    /// Items with a crafting job in progress
    #[serde(default)]
    pub crafting: Vec<ItemId>,
    /// Running totals moved to the intake point
    #[serde(default)]
    pub delivered: BTreeMap<ItemId, u64>,
}

impl Default for WorldDocument {
    fn default() -> Self {
        Self {
            time: default_time(),
            supports_crafting_query: false,
            requests: Vec::new(),
            items: Vec::new(),
            patterns: Vec::new(),
            crafting: Vec::new(),
            delivered: BTreeMap::new(),
        }
    }
}

impl WorldDocument {
    /// Remove up to `amount` plain units of `item_id`, returning how many moved
    fn take(&mut self, item_id: &ItemId, amount: u64) -> u64 {
        let mut moved = 0;
        for stack in self
            .items
            .iter_mut()
            .filter(|s| &s.item_id == item_id && !s.is_qualified())
        {
            let take = stack.amount.min(amount - moved);
            stack.amount -= take;
            moved += take;
            if moved == amount {
                break;
            }
        }
        self.items.retain(|s| s.amount > 0);
        if moved > 0 {
            *self.delivered.entry(item_id.clone()).or_insert(0) += moved;
        }
        moved
    }

    fn order(&mut self, item_id: &ItemId) -> bool {
        if !self.patterns.contains(item_id) {
            return false;
        }
        if !self.crafting.contains(item_id) {
            self.crafting.push(item_id.clone());
        }
        true
    }
}

/// Bridge backed by a [`WorldDocument`] file
#[derive(Clone)]
pub struct WorldFileBridge {
    path: PathBuf,
    crafting_query: bool,
    guard: Arc<Mutex<()>>,
}

impl WorldFileBridge {
    /// Open an existing world file; it must parse
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BridgeError> {
        let path = path.into();
        let doc = read_document(&path)?;
        Ok(Self {
            path,
            crafting_query: doc.supports_crafting_query,
            guard: Arc::new(Mutex::new(())),
        })
    }

    /// Write `doc` to `path` and open it
    pub fn create(path: impl Into<PathBuf>, doc: &WorldDocument) -> Result<Self, BridgeError> {
        let path = path.into();
        write_document(&path, doc)?;
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents of the file
    pub fn document(&self) -> Result<WorldDocument, BridgeError> {
        let _lock = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        read_document(&self.path)
    }

    fn update<T>(&self, f: impl FnOnce(&mut WorldDocument) -> T) -> Result<T, BridgeError> {
        let _lock = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        let mut doc = read_document(&self.path)?;
        let out = f(&mut doc);
        write_document(&self.path, &doc)?;
        Ok(out)
    }
}

fn read_document(path: &Path) -> Result<WorldDocument, BridgeError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| BridgeError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&content).map_err(|e| BridgeError::Json {
        source_name: path.display().to_string(),
        message: e.to_string(),
    })
}

fn write_document(path: &Path, doc: &WorldDocument) -> Result<(), BridgeError> {
    let content = serde_json::to_string_pretty(doc).map_err(|e| BridgeError::Json {
        source_name: path.display().to_string(),
        message: e.to_string(),
    })?;
    // Write to a sibling and rename so readers never see a partial file
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content).map_err(|e| BridgeError::Io(tmp.clone(), e))?;
    std::fs::rename(&tmp, path).map_err(|e| BridgeError::Io(path.to_path_buf(), e))
}

#[async_trait]
impl ColonyAdapter for WorldFileBridge {
    async fn open_requests(&self) -> Result<Vec<Request>, ColonyError> {
        Ok(self.document()?.requests)
    }
}

#[async_trait]
impl InventoryAdapter for WorldFileBridge {
    async fn stacks(&self) -> Result<Vec<ItemStack>, InventoryError> {
        Ok(self.document()?.items)
    }

    async fn transfer(&self, item_id: &ItemId, amount: u64) -> Result<u64, InventoryError> {
        Ok(self.update(|doc| doc.take(item_id, amount))?)
    }

    fn supports_crafting_query(&self) -> bool {
        self.crafting_query
    }

    async fn is_crafting(&self, item_id: &ItemId) -> Result<bool, InventoryError> {
        Ok(self.document()?.crafting.contains(item_id))
    }

    async fn craft(&self, item_id: &ItemId, _amount: u64) -> Result<bool, InventoryError> {
        Ok(self.update(|doc| doc.order(item_id))?)
    }
}

#[async_trait]
impl WorldClockAdapter for WorldFileBridge {
    async fn time_of_day(&self) -> Result<f64, WorldClockError> {
        Ok(self.document()?.time)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
