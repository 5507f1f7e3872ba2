// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where colony, inventory and world-time data come from

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:8765";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeKind {
    /// JSON over HTTP to a peripheral bridge inside the game
    #[default]
    Http,
    /// A JSON world document on disk
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    pub kind: BridgeKind,
    pub url: String,
    /// World document for the file bridge, relative to the project root
    pub path: PathBuf,
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            kind: BridgeKind::Http,
            url: DEFAULT_BRIDGE_URL.to_string(),
            path: PathBuf::from("world.json"),
            timeout: Duration::from_secs(5),
        }
    }
}
