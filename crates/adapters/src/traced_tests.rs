// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::colony::FakeColonyAdapter;
use crate::inventory::{FakeInventoryAdapter, InventoryCall};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn new() -> Self {
        Self::default()
    }

    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::new();
    let logs_clone = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs_clone)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

fn planks() -> ItemId {
    ItemId::new("minecraft:oak_planks")
}

// =============================================================================
// Precondition tests
// =============================================================================

#[tokio::test]
async fn zero_transfer_never_reaches_inventory() {
    let fake = FakeInventoryAdapter::new().with_stock(planks(), 10);
    let traced = TracedInventoryAdapter::new(fake.clone());

    assert_eq!(traced.transfer(&planks(), 0).await.unwrap(), 0);
    assert!(fake.transfers().is_empty());
}

#[tokio::test]
async fn wrapper_passes_through_capability() {
    let plain = TracedInventoryAdapter::new(FakeInventoryAdapter::new());
    let capable = TracedInventoryAdapter::new(FakeInventoryAdapter::new().with_crafting_query());

    assert!(!plain.supports_crafting_query());
    assert!(capable.supports_crafting_query());
}

#[tokio::test]
async fn wrapper_delegates_every_call() {
    let fake = FakeInventoryAdapter::new()
        .with_stock(planks(), 10)
        .with_pattern("minecraft:torch");
    let traced = TracedInventoryAdapter::new(fake.clone());

    traced.snapshot().await.unwrap();
    traced.transfer(&planks(), 3).await.unwrap();
    traced.craft(&ItemId::new("minecraft:torch"), 4).await.unwrap();

    let calls = fake.calls();
    assert!(matches!(calls[0], InventoryCall::Stacks));
    assert!(matches!(calls[1], InventoryCall::Transfer { .. }));
    assert!(matches!(calls[2], InventoryCall::Craft { .. }));
    assert_eq!(fake.stock(&planks()), 7);
}

// =============================================================================
// Tracing output verification tests
// =============================================================================

#[test]
fn transfer_logs_span_and_timing() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeInventoryAdapter::new().with_stock(planks(), 10);
        TracedInventoryAdapter::new(fake).transfer(&planks(), 4).await
    });

    assert_eq!(result.unwrap(), 4);
    assert!(logs.contains("inventory.transfer"), "Logs:\n{}", logs);
    assert!(logs.contains("minecraft:oak_planks"), "Logs:\n{}", logs);
    assert!(logs.contains("transferred"), "Logs:\n{}", logs);
    assert!(logs.contains("elapsed_ms"), "Logs:\n{}", logs);
}

#[test]
fn short_transfer_logs_partial() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeInventoryAdapter::new().with_stock(planks(), 2);
        TracedInventoryAdapter::new(fake).transfer(&planks(), 5).await
    });

    assert_eq!(result.unwrap(), 2);
    assert!(logs.contains("partial transfer"), "Logs:\n{}", logs);
}

#[test]
fn rejected_craft_logs_warning() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeInventoryAdapter::new();
        TracedInventoryAdapter::new(fake)
            .craft(&ItemId::new("minecraft:beacon"), 1)
            .await
    });

    assert!(!result.unwrap());
    assert!(logs.contains("WARN"), "Logs:\n{}", logs);
    assert!(logs.contains("craft rejected"), "Logs:\n{}", logs);
}

#[test]
fn colony_failure_logs_error() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeColonyAdapter::new();
        fake.set_unavailable("peripheral detached");
        TracedColonyAdapter::new(fake).open_requests().await
    });

    assert!(result.is_err());
    assert!(logs.contains("request fetch failed"), "Logs:\n{}", logs);
    assert!(logs.contains("peripheral detached"), "Logs:\n{}", logs);
}

#[test]
fn colony_success_logs_count() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeColonyAdapter::with_requests(vec![Request::new("Torch", 4)]);
        TracedColonyAdapter::new(fake).open_requests().await
    });

    assert_eq!(result.unwrap().len(), 1);
    assert!(logs.contains("colony.open_requests"), "Logs:\n{}", logs);
    assert!(logs.contains("count=1"), "Logs:\n{}", logs);
}
