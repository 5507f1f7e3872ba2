// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake colony adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ColonyAdapter, ColonyError};
use async_trait::async_trait;
use courier_core::Request;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeColonyState {
    requests: Vec<Request>,
    error: Option<String>,
    fetches: usize,
}

/// Fake colony adapter serving a fixed request list
#[derive(Clone, Default)]
pub struct FakeColonyAdapter {
    inner: Arc<Mutex<FakeColonyState>>,
}

impl FakeColonyAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requests(requests: Vec<Request>) -> Self {
        let adapter = Self::new();
        adapter.set_requests(requests);
        adapter
    }

    pub fn set_requests(&self, requests: Vec<Request>) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).requests = requests;
    }

    /// Make subsequent fetches fail with the given message
    pub fn set_unavailable(&self, message: impl Into<String>) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).error = Some(message.into());
    }

    /// Number of times the request list was fetched
    pub fn fetches(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).fetches
    }
}

#[async_trait]
impl ColonyAdapter for FakeColonyAdapter {
    async fn open_requests(&self) -> Result<Vec<Request>, ColonyError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.fetches += 1;
        match &inner.error {
            Some(message) => Err(ColonyError::Unavailable(message.clone())),
            None => Ok(inner.requests.clone()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
