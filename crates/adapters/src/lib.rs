// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O

pub mod bridge;
pub mod colony;
pub mod display;
pub mod inventory;
pub mod traced;
pub mod world;

pub use bridge::{Bridge, BridgeError, HttpBridge, WorldDocument, WorldFileBridge};
pub use colony::{ColonyAdapter, ColonyError};
pub use display::{
    ConfiguredDisplay, DisplayAdapter, DisplayError, LogDisplay, NoOpDisplay, TerminalDisplay,
};
pub use inventory::{InventoryAdapter, InventoryError};
pub use traced::{TracedColonyAdapter, TracedInventoryAdapter};
pub use world::{WorldClockAdapter, WorldClockError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use colony::FakeColonyAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use display::{DisplayCall, FakeDisplay};
#[cfg(any(test, feature = "test-support"))]
pub use inventory::{FakeInventoryAdapter, InventoryCall};
#[cfg(any(test, feature = "test-support"))]
pub use world::FakeWorldClock;
