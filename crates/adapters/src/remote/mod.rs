// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote log store adapters

mod gcs;
mod registry;
mod s3;

pub use gcs::GcsCliBackend;
pub use registry::{BackendRegistry, Route};
pub use s3::S3CliBackend;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRemoteBackend, RemoteCall};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from shipping a log to a remote store
#[derive(Debug, Error)]
pub enum RemoteWriteError {
    #[error("could not write logs to {destination}: {message}")]
    Failed {
        destination: String,
        message: String,
    },
}

/// Errors from reading a log back from a remote store
#[derive(Debug, Error)]
pub enum RemoteReadError {
    #[error("no remote log at {0}")]
    NotFound(String),
    #[error("could not read logs from {location}: {message}")]
    Failed { location: String, message: String },
}

/// Adapter for one remote object-store family.
///
/// Implementations do not retry; callers decide what a failure means.
#[async_trait]
pub trait RemoteLogBackend: Send + Sync + 'static {
    /// Short name used in diagnostics (e.g. `s3`).
    fn name(&self) -> &'static str;

    /// Read the full object at `location`.
    async fn read(&self, location: &str) -> Result<Vec<u8>, RemoteReadError>;

    /// Write `content` to `destination`.
    async fn write(&self, content: &[u8], destination: &str) -> Result<(), RemoteWriteError>;
}

/// Combine `content` with whatever is already stored at `destination`.
///
/// An unreadable or missing object counts as empty, so the first upload
/// of a log is never blocked by the read.
pub(crate) async fn append_to_existing<B>(backend: &B, content: &[u8], destination: &str) -> Vec<u8>
where
    B: RemoteLogBackend + ?Sized,
{
    match backend.read(destination).await {
        Ok(mut existing) if !existing.is_empty() => {
            existing.push(b'\n');
            existing.extend_from_slice(content);
            existing
        }
        Ok(_) => content.to_vec(),
        Err(e) => {
            tracing::debug!(destination, error = %e, "no existing remote log to append to");
            content.to_vec()
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
