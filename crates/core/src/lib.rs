// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! courier-core: decision logic for the colony request courier
//!
//! This crate provides:
//! - Request, item and inventory snapshot types
//! - The skip classifier and the crafting cooldown tracker
//! - Outcome counting and report rendering
//! - The scan pacing state machine
//! - Project configuration
//!
//! Nothing here performs I/O; collaborators live in `courier-adapters` and
//! the async orchestration in `courier-engine`.

pub mod clock;
pub mod config;

pub mod classify;
pub mod cooldown;
pub mod inventory;
pub mod item;
pub mod night;
pub mod outcome;
pub mod pacer;
pub mod report;
pub mod request;
pub mod scan;

pub use classify::{Classifier, SkipReason, SkipRule};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{BridgeConfig, BridgeKind, ConfigError, CourierConfig, DisplayKind, CONFIG_FILE};
pub use cooldown::CooldownTracker;
pub use inventory::InventorySnapshot;
pub use item::{ItemId, ItemStack};
pub use night::NightWindow;
pub use outcome::{Outcome, OutcomeKind, ScheduledVia};
pub use pacer::{Pacer, PacerEffect, PacerEvent, PacerState};
pub use report::{Report, ReportLine, Tone};
pub use request::Request;
pub use scan::{ScanCounts, ScanEntry, ScanResult, ScanSummary, ScanTrigger};
