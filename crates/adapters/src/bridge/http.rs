// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-over-HTTP bridge to a peripheral server inside the game

use super::wire::{Capabilities, CraftReply, CraftingReply, ItemAmount, TimeReply, TransferReply};
use super::entries::decode_entries;
use super::BridgeError;
use crate::colony::{ColonyAdapter, ColonyError};
use crate::inventory::{InventoryAdapter, InventoryError};
use crate::world::{WorldClockAdapter, WorldClockError};
use async_trait::async_trait;
use courier_core::{ItemId, ItemStack, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use ureq::Agent;

/// Bridge speaking to `GET /requests`, `GET /inventory`, `POST /transfer`,
/// `GET /crafting`, `POST /craft`, `GET /time` and `GET /capabilities`
#[derive(Clone)]
pub struct HttpBridge {
    agent: Agent,
    base_url: String,
    crafting_query: bool,
}

impl HttpBridge {
    /// Build the client and read the bridge's capabilities
    pub async fn connect(base_url: &str, timeout: Duration) -> Result<Self, BridgeError> {
        let config = Agent::config_builder().timeout_global(Some(timeout)).build();
        let mut bridge = Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.trim_end_matches('/').to_string(),
            crafting_query: false,
        };
        let caps: Capabilities = bridge.get("/capabilities", None).await?;
        bridge.crafting_query = caps.crafting_query;
        tracing::info!(url = %bridge.base_url, crafting_query = caps.crafting_query, "bridge connected");
        Ok(bridge)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T>(&self, path: &str, item: Option<&ItemId>) -> Result<T, BridgeError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let agent = self.agent.clone();
        let url = format!("{}{}", self.base_url, path);
        let item = item.map(|i| i.as_str().to_string());
        blocking(move || {
            let mut request = agent.get(&url);
            if let Some(item) = &item {
                request = request.query("item", item);
            }
            let mut response = request.call().map_err(|e| http_error(&url, e))?;
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| http_error(&url, e))?;
            parse(&url, &body)
        })
        .await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, BridgeError>
    where
        B: Serialize,
        T: DeserializeOwned + Send + 'static,
    {
        let agent = self.agent.clone();
        let url = format!("{}{}", self.base_url, path);
        let payload = serde_json::to_string(body).map_err(|e| BridgeError::Json {
            source_name: url.clone(),
            message: e.to_string(),
        })?;
        blocking(move || {
            let mut response = agent
                .post(&url)
                .header("content-type", "application/json")
                .send(payload.as_str())
                .map_err(|e| http_error(&url, e))?;
            let body = response
                .body_mut()
                .read_to_string()
                .map_err(|e| http_error(&url, e))?;
            parse(&url, &body)
        })
        .await
    }
}

async fn blocking<T, F>(f: F) -> Result<T, BridgeError>
where
    F: FnOnce() -> Result<T, BridgeError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| BridgeError::Join(e.to_string()))?
}

fn http_error(url: &str, e: ureq::Error) -> BridgeError {
    BridgeError::Http {
        endpoint: url.to_string(),
        message: e.to_string(),
    }
}

/// An empty body reads as `null`
fn parse<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, BridgeError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| BridgeError::Json {
        source_name: url.to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl ColonyAdapter for HttpBridge {
    async fn open_requests(&self) -> Result<Vec<Request>, ColonyError> {
        let raw: Option<Vec<Value>> = self.get("/requests", None).await?;
        Ok(decode_entries("/requests", raw))
    }
}

#[async_trait]
impl InventoryAdapter for HttpBridge {
    async fn stacks(&self) -> Result<Vec<ItemStack>, InventoryError> {
        let raw: Option<Vec<Value>> = self.get("/inventory", None).await?;
        Ok(decode_entries("/inventory", raw))
    }

    async fn transfer(&self, item_id: &ItemId, amount: u64) -> Result<u64, InventoryError> {
        let body = ItemAmount {
            item: item_id.clone(),
            amount,
        };
        let reply: TransferReply = self.post("/transfer", &body).await?;
        Ok(reply.moved)
    }

    fn supports_crafting_query(&self) -> bool {
        self.crafting_query
    }

    async fn is_crafting(&self, item_id: &ItemId) -> Result<bool, InventoryError> {
        let reply: CraftingReply = self.get("/crafting", Some(item_id)).await?;
        Ok(reply.crafting)
    }

    async fn craft(&self, item_id: &ItemId, amount: u64) -> Result<bool, InventoryError> {
        let body = ItemAmount {
            item: item_id.clone(),
            amount,
        };
        let reply: CraftReply = self.post("/craft", &body).await?;
        Ok(reply.accepted)
    }
}

#[async_trait]
impl WorldClockAdapter for HttpBridge {
    async fn time_of_day(&self) -> Result<f64, WorldClockError> {
        let reply: TimeReply = self.get("/time", None).await?;
        Ok(reply.hour)
    }
}
