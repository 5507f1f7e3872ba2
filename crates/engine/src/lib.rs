// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Courier fulfillment engine

mod error;
mod fulfill;
mod runtime;
mod scan;

pub use error::EngineError;
pub use fulfill::FulfillmentController;
pub use runtime::{LoopEvent, Runtime, RuntimeConfig, RuntimeDeps, SendReceipt};
pub use scan::ScanOrchestrator;
