// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Night detection from the world's time of day

use serde::{Deserialize, Serialize};

/// Hours of the world day, 0.0 up to (not including) 24.0, during which the
/// colony sleeps. `start_hour > end_hour` wraps around midnight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightWindow {
    pub start_hour: f64,
    pub end_hour: f64,
}

impl NightWindow {
    pub fn new(start_hour: f64, end_hour: f64) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    pub fn contains(&self, hour: f64) -> bool {
        let hour = hour.rem_euclid(24.0);
        if self.start_hour <= self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

impl Default for NightWindow {
    fn default() -> Self {
        Self::new(18.5, 5.5)
    }
}
