// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::TempDir;

fn world() -> WorldDocument {
    WorldDocument {
        time: 20.0,
        supports_crafting_query: true,
        requests: vec![Request::new("Oak Planks", 16).with_item("minecraft:oak_planks")],
        items: vec![
            ItemStack::new("minecraft:oak_planks", 10),
            ItemStack::new("minecraft:oak_planks", 4),
            ItemStack::new("minecraft:oak_planks", 50).with_nbt("{display:{Name:'Fancy'}}"),
        ],
        patterns: vec![ItemId::new("minecraft:torch")],
        ..WorldDocument::default()
    }
}

fn bridge(dir: &TempDir) -> WorldFileBridge {
    WorldFileBridge::create(dir.path().join("world.json"), &world()).unwrap()
}

#[tokio::test]
async fn reads_requests_time_and_capability() {
    let dir = TempDir::new().unwrap();
    let bridge = bridge(&dir);

    let requests = bridge.open_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].display_name, "Oak Planks");
    assert_eq!(bridge.time_of_day().await.unwrap(), 20.0);
    assert!(bridge.supports_crafting_query());
}

#[tokio::test]
async fn snapshot_ignores_qualified_stacks() {
    let dir = TempDir::new().unwrap();
    let bridge = bridge(&dir);

    let snapshot = bridge.snapshot().await.unwrap();
    assert_eq!(snapshot.available(&ItemId::new("minecraft:oak_planks")), 14);
}

#[tokio::test]
async fn transfer_moves_plain_stock_and_persists() {
    let dir = TempDir::new().unwrap();
    let bridge = bridge(&dir);
    let planks = ItemId::new("minecraft:oak_planks");

    let moved = bridge.transfer(&planks, 12).await.unwrap();
    assert_eq!(moved, 12);

    let reopened = WorldFileBridge::open(bridge.path()).unwrap();
    let doc = reopened.document().unwrap();
    assert_eq!(doc.delivered.get(&planks), Some(&12));
    assert_eq!(reopened.snapshot().await.unwrap().available(&planks), 2);
    // Qualified stack untouched
    assert!(doc.items.iter().any(|s| s.is_qualified() && s.amount == 50));
}

#[tokio::test]
async fn transfer_is_capped_by_plain_stock() {
    let dir = TempDir::new().unwrap();
    let bridge = bridge(&dir);

    let moved = bridge
        .transfer(&ItemId::new("minecraft:oak_planks"), 100)
        .await
        .unwrap();
    assert_eq!(moved, 14);
}

#[tokio::test]
async fn transfer_of_missing_item_moves_nothing() {
    let dir = TempDir::new().unwrap();
    let bridge = bridge(&dir);

    let moved = bridge.transfer(&ItemId::new("minecraft:dirt"), 5).await.unwrap();
    assert_eq!(moved, 0);
    assert!(bridge.document().unwrap().delivered.is_empty());
}

#[tokio::test]
async fn craft_requires_pattern_and_marks_crafting() {
    let dir = TempDir::new().unwrap();
    let bridge = bridge(&dir);
    let torch = ItemId::new("minecraft:torch");

    assert!(!bridge.is_crafting(&torch).await.unwrap());
    assert!(bridge.craft(&torch, 8).await.unwrap());
    assert!(bridge.is_crafting(&torch).await.unwrap());

    assert!(!bridge.craft(&ItemId::new("minecraft:dirt"), 1).await.unwrap());
}

#[test]
fn open_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = WorldFileBridge::open(dir.path().join("absent.json"))
        .err()
        .unwrap();
    assert!(matches!(err, BridgeError::Io(_, _)));
}

#[test]
fn open_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = WorldFileBridge::open(&path).err().unwrap();
    assert!(matches!(err, BridgeError::Json { .. }));
}

#[test]
fn missing_fields_take_defaults() {
    let doc: WorldDocument = serde_json::from_str("{}").unwrap();
    assert_eq!(doc, WorldDocument::default());
}

#[tokio::test]
async fn null_lists_read_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");
    std::fs::write(&path, r#"{ "requests": null, "items": null }"#).unwrap();
    let bridge = WorldFileBridge::open(&path).unwrap();

    assert!(bridge.open_requests().await.unwrap().is_empty());
    assert!(bridge.stacks().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_entries_do_not_hide_valid_ones() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");
    std::fs::write(
        &path,
        r#"{
            "requests": [
                { "display_name": "Cobblestone", "needed": 16, "item_id": "minecraft:cobblestone" },
                { "display_name": "Glass", "needed": 2.0, "item_id": "minecraft:glass" },
                { "display_name": "Torch", "item_id": "minecraft:torch" }
            ],
            "items": [
                { "name": "minecraft:cobblestone", "amount": 64 },
                { "name": "minecraft:glass", "amount": -3 }
            ]
        }"#,
    )
    .unwrap();
    let bridge = WorldFileBridge::open(&path).unwrap();

    let requests = bridge.open_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].display_name, "Cobblestone");
    assert_eq!(
        bridge.stacks().await.unwrap(),
        vec![ItemStack::new("minecraft:cobblestone", 64)]
    );
}
