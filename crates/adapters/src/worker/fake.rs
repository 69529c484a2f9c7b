// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake worker log fetcher for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{WorkerFetchError, WorkerLogFetcher};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
struct FakeFetcherState {
    requests: Vec<String>,
    responses: HashMap<String, String>,
}

/// Fetcher that answers from canned responses and records every URL.
///
/// Unknown URLs fail with a request error.
#[derive(Clone, Default)]
pub struct FakeWorkerLogFetcher {
    inner: Arc<Mutex<FakeFetcherState>>,
}

impl FakeWorkerLogFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, body: &str) {
        self.inner
            .lock()
            .responses
            .insert(url.to_string(), body.to_string());
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().requests.clone()
    }
}

#[async_trait]
impl WorkerLogFetcher for FakeWorkerLogFetcher {
    async fn fetch(&self, url: &str) -> Result<String, WorkerFetchError> {
        let mut state = self.inner.lock();
        state.requests.push(url.to_string());
        state
            .responses
            .get(url)
            .cloned()
            .ok_or_else(|| WorkerFetchError::Request {
                url: url.to_string(),
                message: "connection refused".to_string(),
            })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
