// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::remote::{RemoteLogBackend, RemoteReadError, RemoteWriteError};
use crate::worker::{WorkerFetchError, WorkerLogFetcher};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any RemoteLogBackend
#[derive(Clone)]
pub struct TracedBackend<B> {
    inner: B,
}

impl<B> TracedBackend<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<B: RemoteLogBackend> RemoteLogBackend for TracedBackend<B> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn read(&self, location: &str) -> Result<Vec<u8>, RemoteReadError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.read(location).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(bytes) => tracing::debug!(bytes = bytes.len(), elapsed_ms, "read complete"),
                Err(RemoteReadError::NotFound(_)) => tracing::debug!(elapsed_ms, "not found"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "read failed"),
            }
            result
        }
        .instrument(tracing::info_span!("remote.read", backend = self.inner.name(), location))
        .await
    }

    async fn write(&self, content: &[u8], destination: &str) -> Result<(), RemoteWriteError> {
        async {
            tracing::info!(bytes = content.len(), "uploading");
            let start = std::time::Instant::now();
            let result = self.inner.write(content, destination).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "upload complete"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "upload failed"),
            }
            result
        }
        .instrument(tracing::info_span!(
            "remote.write",
            backend = self.inner.name(),
            destination
        ))
        .await
    }
}

/// Wrapper that adds tracing to any WorkerLogFetcher
#[derive(Clone)]
pub struct TracedFetcher<F> {
    inner: F,
}

impl<F> TracedFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<F: WorkerLogFetcher> WorkerLogFetcher for TracedFetcher<F> {
    async fn fetch(&self, url: &str) -> Result<String, WorkerFetchError> {
        let result = self.inner.fetch(url).await;
        tracing::info_span!("worker.fetch", url).in_scope(|| match &result {
            Ok(body) => tracing::debug!(bytes = body.len(), "fetched"),
            Err(e) => tracing::warn!(error = %e, "fetch failed"),
        });
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
