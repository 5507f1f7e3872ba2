// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake world clock for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{WorldClockAdapter, WorldClockError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeWorldState {
    hour: f64,
    unavailable: bool,
    queries: usize,
}

/// World clock a test can move between day and night
#[derive(Clone, Default)]
pub struct FakeWorldClock {
    inner: Arc<Mutex<FakeWorldState>>,
}

impl FakeWorldClock {
    /// Starts at noon
    pub fn new() -> Self {
        let clock = Self::default();
        clock.set_hour(12.0);
        clock
    }

    pub fn set_hour(&self, hour: f64) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).hour = hour;
    }

    pub fn set_night(&self) {
        self.set_hour(0.0);
    }

    pub fn set_day(&self) {
        self.set_hour(12.0);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).unavailable = unavailable;
    }

    /// Number of times the time of day was read
    pub fn queries(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).queries
    }
}

#[async_trait]
impl WorldClockAdapter for FakeWorldClock {
    async fn time_of_day(&self) -> Result<f64, WorldClockError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.queries += 1;
        if inner.unavailable {
            return Err(WorldClockError::Unavailable("daylight sensor missing".into()));
        }
        Ok(inner.hour)
    }
}
