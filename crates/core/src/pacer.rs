// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scan pacing state machine
//!
//! Every timer tick counts down toward the next scan. At night (when pausing
//! is enabled) the countdown freezes and a paused indicator is shown instead.
//! A manual trigger scans immediately from any state and restarts the
//! countdown. Scanning itself is not a state: it is the `RunScan` effect,
//! which the runtime performs to completion before the next event is taken.

use crate::scan::ScanTrigger;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PacerState {
    /// Waiting for `remaining` more ticks before scanning
    Countdown { remaining: u32 },
    /// Night; countdown frozen at `remaining`
    NightPaused { remaining: u32 },
}

impl PacerState {
    pub fn remaining(&self) -> u32 {
        match self {
            PacerState::Countdown { remaining } | PacerState::NightPaused { remaining } => {
                *remaining
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PacerState::NightPaused { .. })
    }
}

impl fmt::Display for PacerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacerState::Countdown { remaining } => write!(f, "next scan in {} ticks", remaining),
            PacerState::NightPaused { .. } => write!(f, "paused for the night"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacerEvent {
    /// One timer period elapsed; `night` is the world clock's verdict
    Tick { night: bool },
    /// Operator requested an immediate scan
    ManualTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacerEffect {
    RunScan(ScanTrigger),
    RenderCountdown { remaining: u32 },
    RenderPaused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pacer {
    pub state: PacerState,
    interval: u32,
    night_pause: bool,
}

impl Pacer {
    /// `interval` is the number of ticks between scans, at least one
    pub fn new(interval: u32, night_pause: bool) -> Self {
        let interval = interval.max(1);
        Self {
            state: PacerState::Countdown {
                remaining: interval,
            },
            interval,
            night_pause,
        }
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Whether ticks need the world clock consulted at all
    pub fn night_pause(&self) -> bool {
        self.night_pause
    }

    pub fn transition(self, event: PacerEvent) -> (Self, Vec<PacerEffect>) {
        let remaining = self.state.remaining();
        match event {
            PacerEvent::Tick { night: true } if self.night_pause => (
                self.with_state(PacerState::NightPaused { remaining }),
                vec![PacerEffect::RenderPaused],
            ),
            PacerEvent::Tick { .. } => match remaining.saturating_sub(1) {
                0 => self.restart(ScanTrigger::Timer),
                remaining => (
                    self.with_state(PacerState::Countdown { remaining }),
                    vec![PacerEffect::RenderCountdown { remaining }],
                ),
            },
            PacerEvent::ManualTrigger => self.restart(ScanTrigger::Manual),
        }
    }

    fn restart(self, trigger: ScanTrigger) -> (Self, Vec<PacerEffect>) {
        let remaining = self.interval;
        (
            self.with_state(PacerState::Countdown { remaining }),
            vec![PacerEffect::RunScan(trigger)],
        )
    }

    fn with_state(mut self, state: PacerState) -> Self {
        self.state = state;
        self
    }
}

#[cfg(test)]
#[path = "pacer_tests.rs"]
mod tests;
