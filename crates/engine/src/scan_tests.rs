// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use courier_adapters::{FakeColonyAdapter, FakeInventoryAdapter, InventoryCall};
use courier_core::{
    Classifier, Clock, FakeClock, OutcomeKind, Report, Request, ScanCounts,
};
use std::time::Duration;

fn orchestrator(
    colony: &FakeColonyAdapter,
    inventory: &FakeInventoryAdapter,
) -> ScanOrchestrator<FakeColonyAdapter, FakeInventoryAdapter> {
    let controller = FulfillmentController::new(
        inventory.clone(),
        Classifier::default(),
        Duration::from_secs(120),
    );
    ScanOrchestrator::new(colony.clone(), controller)
}

fn mixed_requests() -> Vec<Request> {
    vec![
        Request::new("Cobblestone", 16).with_item("minecraft:cobblestone"),
        Request::new("Iron Pickaxe", 1)
            .with_description("Tool of class Pickaxe")
            .with_item("minecraft:iron_pickaxe"),
        Request::new("Oak Planks", 64).with_item("minecraft:oak_planks"),
        Request::new("Beacon", 1).with_item("minecraft:beacon"),
        Request::new("Food", 10),
    ]
}

#[tokio::test]
async fn empty_request_list_yields_zero_counts() {
    let colony = FakeColonyAdapter::new();
    let inventory = FakeInventoryAdapter::new();
    let mut scan = orchestrator(&colony, &inventory);

    let result = scan
        .run_scan(FakeClock::new().now(), ScanTrigger::Timer)
        .await
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(result.counts, ScanCounts::default());
    assert!(Report::render(&result, 40).to_string().contains("No open requests"));
    // Short-circuits before touching inventory
    assert!(inventory.calls().is_empty());
}

#[tokio::test]
async fn every_request_gets_one_outcome() {
    let colony = FakeColonyAdapter::with_requests(mixed_requests());
    let inventory = FakeInventoryAdapter::new()
        .with_stock("minecraft:cobblestone", 50)
        .with_pattern("minecraft:oak_planks");
    let mut scan = orchestrator(&colony, &inventory);

    let result = scan
        .run_scan(FakeClock::new().now(), ScanTrigger::Manual)
        .await
        .unwrap();

    let kinds: Vec<OutcomeKind> = result.entries.iter().map(|e| e.outcome.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            OutcomeKind::Ok,
            OutcomeKind::Skip,
            OutcomeKind::Scheduled,
            OutcomeKind::Fail,
            OutcomeKind::Skip,
        ]
    );
    assert_eq!(result.counts.total, 5);
    assert_eq!(result.counts.fulfilled, 1);
    assert_eq!(result.counts.scheduled, 1);
    assert_eq!(result.counts.skipped, 2);
    assert_eq!(result.counts.failed, 1);
    assert_eq!(result.counts.classified(), result.counts.total);
    assert_eq!(result.trigger, ScanTrigger::Manual);
}

#[tokio::test]
async fn snapshot_is_taken_once_per_scan() {
    let colony = FakeColonyAdapter::with_requests(mixed_requests());
    let inventory = FakeInventoryAdapter::new().with_stock("minecraft:cobblestone", 50);
    let mut scan = orchestrator(&colony, &inventory);

    scan.run_scan(FakeClock::new().now(), ScanTrigger::Timer)
        .await
        .unwrap();

    let snapshots = inventory
        .calls()
        .iter()
        .filter(|c| matches!(c, InventoryCall::Stacks))
        .count();
    assert_eq!(snapshots, 1);
    assert_eq!(colony.fetches(), 1);
}

#[tokio::test]
async fn cooldown_carries_across_scans() {
    let colony = FakeColonyAdapter::with_requests(vec![
        Request::new("Oak Planks", 64).with_item("minecraft:oak_planks")
    ]);
    let inventory = FakeInventoryAdapter::new().with_pattern("minecraft:oak_planks");
    let mut scan = orchestrator(&colony, &inventory);
    let clock = FakeClock::new();

    let first = scan.run_scan(clock.now(), ScanTrigger::Timer).await.unwrap();
    clock.advance_secs(10);
    let second = scan.run_scan(clock.now(), ScanTrigger::Timer).await.unwrap();

    assert_eq!(first.counts.scheduled, 1);
    assert_eq!(second.counts.waiting, 1);
    assert_eq!(scan.controller().cooldown().len(), 1);
}

#[tokio::test]
async fn counts_include_requests_past_display_rows() {
    let requests: Vec<Request> = (0..30)
        .map(|i| Request::new(format!("Block {}", i), 0))
        .collect();
    let colony = FakeColonyAdapter::with_requests(requests);
    let inventory = FakeInventoryAdapter::new();
    let mut scan = orchestrator(&colony, &inventory);

    let result = scan
        .run_scan(FakeClock::new().now(), ScanTrigger::Timer)
        .await
        .unwrap();
    let report = Report::render(&result, 12);

    assert_eq!(result.counts.total, 30);
    assert_eq!(result.counts.skipped, 30);
    assert!(report.hidden > 0);
    assert!(report.to_string().contains("SKIP 30"));
}

#[tokio::test]
async fn request_fetch_failure_aborts_scan() {
    let colony = FakeColonyAdapter::new();
    colony.set_unavailable("colony building unloaded");
    let inventory = FakeInventoryAdapter::new();
    let mut scan = orchestrator(&colony, &inventory);

    let err = scan
        .run_scan(FakeClock::new().now(), ScanTrigger::Timer)
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::Requests(_)));
    assert!(inventory.calls().is_empty());
}
