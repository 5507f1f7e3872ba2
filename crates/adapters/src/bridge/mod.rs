// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridges to the game world
//!
//! A bridge serves all three data collaborators at once: the colony's
//! request list, the inventory network and the world clock.

mod entries;
mod file;
mod http;
pub mod wire;

pub use file::{WorldDocument, WorldFileBridge};
pub use http::HttpBridge;

use crate::colony::{ColonyAdapter, ColonyError};
use crate::inventory::{InventoryAdapter, InventoryError};
use crate::world::{WorldClockAdapter, WorldClockError};
use async_trait::async_trait;
use courier_core::{BridgeConfig, BridgeKind, ItemId, ItemStack, Request};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("bridge request to {endpoint} failed: {message}")]
    Http { endpoint: String, message: String },
    #[error("world file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("invalid JSON from {source_name}: {message}")]
    Json {
        source_name: String,
        message: String,
    },
    #[error("bridge worker failed: {0}")]
    Join(String),
}

impl From<BridgeError> for ColonyError {
    fn from(e: BridgeError) -> Self {
        match e {
            BridgeError::Json { .. } => ColonyError::Malformed(e.to_string()),
            other => ColonyError::Unavailable(other.to_string()),
        }
    }
}

impl From<BridgeError> for InventoryError {
    fn from(e: BridgeError) -> Self {
        match e {
            BridgeError::Json { .. } => InventoryError::Malformed(e.to_string()),
            other => InventoryError::Unavailable(other.to_string()),
        }
    }
}

impl From<BridgeError> for WorldClockError {
    fn from(e: BridgeError) -> Self {
        WorldClockError::Unavailable(e.to_string())
    }
}

/// Bridge selected by `[bridge] kind`
#[derive(Clone)]
pub enum Bridge {
    Http(HttpBridge),
    File(WorldFileBridge),
}

impl Bridge {
    /// Open the configured bridge and probe its capabilities
    ///
    /// Fails when the bridge cannot be reached, which callers treat as fatal.
    pub async fn connect(config: &BridgeConfig, project_root: &Path) -> Result<Self, BridgeError> {
        match config.kind {
            BridgeKind::Http => Ok(Bridge::Http(
                HttpBridge::connect(&config.url, config.timeout).await?,
            )),
            BridgeKind::File => {
                let path = if config.path.is_absolute() {
                    config.path.clone()
                } else {
                    project_root.join(&config.path)
                };
                Ok(Bridge::File(WorldFileBridge::open(path)?))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Bridge::Http(b) => format!("http {}", b.base_url()),
            Bridge::File(b) => format!("file {}", b.path().display()),
        }
    }
}

#[async_trait]
impl ColonyAdapter for Bridge {
    async fn open_requests(&self) -> Result<Vec<Request>, ColonyError> {
        match self {
            Bridge::Http(b) => b.open_requests().await,
            Bridge::File(b) => b.open_requests().await,
        }
    }
}

#[async_trait]
impl InventoryAdapter for Bridge {
    async fn stacks(&self) -> Result<Vec<ItemStack>, InventoryError> {
        match self {
            Bridge::Http(b) => b.stacks().await,
            Bridge::File(b) => b.stacks().await,
        }
    }

    async fn transfer(&self, item_id: &ItemId, amount: u64) -> Result<u64, InventoryError> {
        match self {
            Bridge::Http(b) => b.transfer(item_id, amount).await,
            Bridge::File(b) => b.transfer(item_id, amount).await,
        }
    }

    fn supports_crafting_query(&self) -> bool {
        match self {
            Bridge::Http(b) => b.supports_crafting_query(),
            Bridge::File(b) => b.supports_crafting_query(),
        }
    }

    async fn is_crafting(&self, item_id: &ItemId) -> Result<bool, InventoryError> {
        match self {
            Bridge::Http(b) => b.is_crafting(item_id).await,
            Bridge::File(b) => b.is_crafting(item_id).await,
        }
    }

    async fn craft(&self, item_id: &ItemId, amount: u64) -> Result<bool, InventoryError> {
        match self {
            Bridge::Http(b) => b.craft(item_id, amount).await,
            Bridge::File(b) => b.craft(item_id, amount).await,
        }
    }
}

#[async_trait]
impl WorldClockAdapter for Bridge {
    async fn time_of_day(&self) -> Result<f64, WorldClockError> {
        match self {
            Bridge::Http(b) => b.time_of_day().await,
            Bridge::File(b) => b.time_of_day().await,
        }
    }
}
