// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregated results of one scan

use crate::outcome::{Outcome, OutcomeKind};
use crate::request::Request;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What caused a scan to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanTrigger {
    /// The countdown reached zero
    Timer,
    /// An operator asked for an immediate scan
    Manual,
    /// First scan after the daemon came up
    Startup,
}

impl fmt::Display for ScanTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanTrigger::Timer => write!(f, "timer"),
            ScanTrigger::Manual => write!(f, "manual"),
            ScanTrigger::Startup => write!(f, "startup"),
        }
    }
}

/// Per-outcome counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanCounts {
    pub total: usize,
    pub fulfilled: usize,
    pub scheduled: usize,
    pub waiting: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl ScanCounts {
    pub fn record(&mut self, kind: OutcomeKind) {
        self.total += 1;
        match kind {
            OutcomeKind::Ok => self.fulfilled += 1,
            OutcomeKind::Scheduled => self.scheduled += 1,
            OutcomeKind::Wait => self.waiting += 1,
            OutcomeKind::Skip => self.skipped += 1,
            OutcomeKind::Fail => self.failed += 1,
        }
    }

    /// Sum of the per-kind counters; always equals `total`
    pub fn classified(&self) -> usize {
        self.fulfilled + self.scheduled + self.waiting + self.skipped + self.failed
    }
}

impl fmt::Display for ScanCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OK {}  CRAFT {}  WAIT {}  SKIP {}  FAIL {}",
            self.fulfilled, self.scheduled, self.waiting, self.skipped, self.failed
        )
    }
}

/// A request together with how it was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEntry {
    pub request: Request,
    pub outcome: Outcome,
}

/// Everything one scan produced, kept only until it is rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub trigger: ScanTrigger,
    pub counts: ScanCounts,
    pub entries: Vec<ScanEntry>,
}

impl ScanResult {
    pub fn new(trigger: ScanTrigger) -> Self {
        Self {
            trigger,
            counts: ScanCounts::default(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, request: Request, outcome: Outcome) {
        self.counts.record(outcome.kind());
        self.entries.push(ScanEntry { request, outcome });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            trigger: self.trigger,
            counts: self.counts,
        }
    }
}

/// Counters without the per-request detail, for status queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub trigger: ScanTrigger,
    pub counts: ScanCounts,
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
