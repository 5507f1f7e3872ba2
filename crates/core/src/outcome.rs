// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal classification of a single request within a scan

use crate::classify::SkipReason;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a SCHEDULED outcome was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduledVia {
    /// The crafting backend confirmed the item is already in production
    AlreadyCrafting,
    /// A new crafting order was accepted during this scan
    Ordered,
}

/// Result of resolving one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Left for manual handling
    Skip { reason: SkipReason },
    /// Fully delivered from stock
    Ok { provided: u64 },
    /// Shortfall is being produced
    Scheduled { provided: u64, via: ScheduledVia },
    /// Shortfall remains and an order was placed recently
    Wait { provided: u64, remaining_secs: u64 },
    /// Shortfall remains and no order could be placed
    Fail { provided: u64, reason: String },
}

/// Outcome discriminant used for counting and tagging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Skip,
    Ok,
    Scheduled,
    Wait,
    Fail,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Skip { .. } => OutcomeKind::Skip,
            Outcome::Ok { .. } => OutcomeKind::Ok,
            Outcome::Scheduled { .. } => OutcomeKind::Scheduled,
            Outcome::Wait { .. } => OutcomeKind::Wait,
            Outcome::Fail { .. } => OutcomeKind::Fail,
        }
    }

    /// Units moved to the intake point while resolving this request
    pub fn provided(&self) -> u64 {
        match self {
            Outcome::Skip { .. } => 0,
            Outcome::Ok { provided }
            | Outcome::Scheduled { provided, .. }
            | Outcome::Wait { provided, .. }
            | Outcome::Fail { provided, .. } => *provided,
        }
    }

    /// Short tag shown on the report's destination line
    ///
    /// Confirmed in-progress crafting and freshly placed orders get distinct
    /// tags so an operator can tell ground truth from throttling.
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Skip { .. } => "SKIP",
            Outcome::Ok { .. } => "OK",
            Outcome::Scheduled {
                via: ScheduledVia::AlreadyCrafting,
                ..
            } => "CRAFTING",
            Outcome::Scheduled {
                via: ScheduledVia::Ordered,
                ..
            } => "CRAFT",
            Outcome::Wait { .. } => "WAIT",
            Outcome::Fail { .. } => "FAIL",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Skip { reason } => write!(f, "skipped: {}", reason),
            Outcome::Ok { provided } => write!(f, "provided {}", provided),
            Outcome::Scheduled {
                via: ScheduledVia::AlreadyCrafting,
                ..
            } => write!(f, "already crafting"),
            Outcome::Scheduled {
                via: ScheduledVia::Ordered,
                ..
            } => write!(f, "craft ordered"),
            Outcome::Wait { remaining_secs, .. } => {
                write!(f, "waiting on cooldown ({}s)", remaining_secs)
            }
            Outcome::Fail { reason, .. } => write!(f, "failed: {}", reason),
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
