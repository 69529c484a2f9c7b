// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fetching task logs served by the worker that ran the task

mod http;

pub use http::HttpWorkerLogFetcher;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeWorkerLogFetcher;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from fetching a worker-served log
#[derive(Debug, Error)]
pub enum WorkerFetchError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("worker returned {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Adapter for the worker log HTTP endpoint
#[async_trait]
pub trait WorkerLogFetcher: Send + Sync + 'static {
    /// GET `url` and return the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, WorkerFetchError>;
}
