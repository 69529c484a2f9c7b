// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{WorkerFetchError, WorkerLogFetcher};
use async_trait::async_trait;
use std::time::Duration;

/// reqwest-backed fetcher.
///
/// No timeout unless one is configured.
#[derive(Clone, Default)]
pub struct HttpWorkerLogFetcher {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpWorkerLogFetcher {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl WorkerLogFetcher for HttpWorkerLogFetcher {
    async fn fetch(&self, url: &str) -> Result<String, WorkerFetchError> {
        let request_error = |e: reqwest::Error| WorkerFetchError::Request {
            url: url.to_string(),
            message: e.to_string(),
        };

        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(WorkerFetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(request_error)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
