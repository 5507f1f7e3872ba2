// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn cobble() -> ItemId {
    ItemId::new("minecraft:cobblestone")
}

#[tokio::test]
async fn snapshot_excludes_qualified_stacks() {
    let adapter = FakeInventoryAdapter::new()
        .with_stock("minecraft:cobblestone", 50)
        .with_qualified(ItemStack::new("minecraft:iron_sword", 1).with_nbt("{Damage:3}"));

    let snapshot = adapter.snapshot().await.unwrap();
    assert_eq!(snapshot.available(&cobble()), 50);
    assert_eq!(snapshot.available(&ItemId::new("minecraft:iron_sword")), 0);
}

#[tokio::test]
async fn transfer_moves_at_most_stored_amount() {
    let adapter = FakeInventoryAdapter::new().with_stock("minecraft:cobblestone", 10);

    assert_eq!(adapter.transfer(&cobble(), 16).await.unwrap(), 10);
    assert_eq!(adapter.stock(&cobble()), 0);
    assert_eq!(adapter.transfers(), vec![(cobble(), 16)]);
}

#[tokio::test]
async fn capped_transfer_is_partial() {
    let adapter = FakeInventoryAdapter::new().with_stock("minecraft:cobblestone", 50);
    adapter.cap_transfers(4);

    assert_eq!(adapter.transfer(&cobble(), 16).await.unwrap(), 4);
    assert_eq!(adapter.stock(&cobble()), 46);
}

#[tokio::test]
async fn craft_requires_pattern_and_starts_job() {
    let adapter = FakeInventoryAdapter::new()
        .with_crafting_query()
        .with_pattern("minecraft:oak_planks");
    let planks = ItemId::new("minecraft:oak_planks");

    assert!(!adapter.craft(&cobble(), 1).await.unwrap());
    assert!(adapter.craft(&planks, 64).await.unwrap());
    assert!(adapter.supports_crafting_query());
    assert!(adapter.is_crafting(&planks).await.unwrap());
    assert_eq!(adapter.crafts().len(), 2);
}

#[tokio::test]
async fn crafting_query_is_off_by_default() {
    let adapter = FakeInventoryAdapter::new();
    assert!(!adapter.supports_crafting_query());
}
