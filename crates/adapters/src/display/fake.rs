// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake display for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DisplayAdapter, DisplayError};
use async_trait::async_trait;
use courier_core::Report;
use std::sync::{Arc, Mutex};

/// Recorded display call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Report(Report),
    Paused,
    Countdown(u32),
}

#[derive(Clone, Default)]
pub struct FakeDisplay {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<DisplayCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                DisplayCall::Report(report) => Some(report),
                _ => None,
            })
            .collect()
    }

    pub fn paused_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, DisplayCall::Paused))
            .count()
    }

    fn record(&self, call: DisplayCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

#[async_trait]
impl DisplayAdapter for FakeDisplay {
    async fn render_report(&self, report: &Report) -> Result<(), DisplayError> {
        self.record(DisplayCall::Report(report.clone()));
        Ok(())
    }

    async fn render_paused(&self) -> Result<(), DisplayError> {
        self.record(DisplayCall::Paused);
        Ok(())
    }

    async fn render_countdown(&self, remaining: u32) -> Result<(), DisplayError> {
        self.record(DisplayCall::Countdown(remaining));
        Ok(())
    }
}
