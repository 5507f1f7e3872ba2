// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A project directory wired to a file bridge, with its own state and socket dirs
pub struct TestProject {
    pub root: TempDir,
    state: TempDir,
}

impl TestProject {
    /// Create a project whose world file holds `world`
    pub fn new(world: Value) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let state = TempDir::new().expect("Failed to create state directory");
        fs::write(
            root.path().join("courier.toml"),
            "[bridge]\nkind = \"file\"\npath = \"world.json\"\n\n[display]\nrows = 0\n",
        )
        .expect("Failed to write courier.toml");
        write_world(root.path(), &world);
        Self { root, state }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// `courier` scoped to this project, isolated from any real daemon
    pub fn courier(&self) -> Command {
        let mut cmd = Command::cargo_bin("courier").expect("courier binary");
        cmd.arg("--project")
            .arg(self.path())
            .env("XDG_STATE_HOME", self.state.path())
            .env("COURIER_SOCKET_DIR", self.state.path().join("sock"))
            .env_remove("COURIER_PROJECT_ROOT")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Current world document as JSON
    pub fn world(&self) -> Value {
        let content =
            fs::read_to_string(self.path().join("world.json")).expect("Failed to read world");
        serde_json::from_str(&content).expect("world.json is not JSON")
    }
}

fn write_world(root: &Path, world: &Value) {
    let content = serde_json::to_string_pretty(world).expect("Failed to encode world");
    fs::write(root.join("world.json"), content).expect("Failed to write world.json");
}

/// One request as the colony reports it
pub fn request(name: &str, needed: i64, target: &str, item: Option<&str>) -> Value {
    let mut value = json!({
        "display_name": name,
        "needed": needed,
        "target": target,
    });
    if let Some(item) = item {
        value["item_id"] = json!(item);
    }
    value
}

/// One plain inventory stack
pub fn stack(item: &str, amount: u64) -> Value {
    json!({ "name": item, "amount": amount })
}
