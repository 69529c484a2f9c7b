// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake remote backend for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{RemoteLogBackend, RemoteReadError, RemoteWriteError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    Read { location: String },
    Write { destination: String, content: Vec<u8> },
}

#[derive(Default)]
struct FakeRemoteState {
    calls: Vec<RemoteCall>,
    objects: HashMap<String, Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
}

/// In-memory remote backend that records every call.
///
/// Writes store content verbatim; there is no append behaviour.
#[derive(Clone)]
pub struct FakeRemoteBackend {
    name: &'static str,
    inner: Arc<Mutex<FakeRemoteState>>,
}

impl FakeRemoteBackend {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Arc::new(Mutex::new(FakeRemoteState::default())),
        }
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.inner.lock().calls.clone()
    }

    /// Recorded writes as `(destination, content)` pairs
    pub fn writes(&self) -> Vec<(String, Vec<u8>)> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                RemoteCall::Write {
                    destination,
                    content,
                } => Some((destination.clone(), content.clone())),
                RemoteCall::Read { .. } => None,
            })
            .collect()
    }

    pub fn object(&self, location: &str) -> Option<Vec<u8>> {
        self.inner.lock().objects.get(location).cloned()
    }

    pub fn insert_object(&self, location: &str, content: &[u8]) {
        self.inner
            .lock()
            .objects
            .insert(location.to_string(), content.to_vec());
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.lock().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.lock().fail_writes = fail;
    }
}

#[async_trait]
impl RemoteLogBackend for FakeRemoteBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn read(&self, location: &str) -> Result<Vec<u8>, RemoteReadError> {
        let mut state = self.inner.lock();
        state.calls.push(RemoteCall::Read {
            location: location.to_string(),
        });
        if state.fail_reads {
            return Err(RemoteReadError::Failed {
                location: location.to_string(),
                message: "injected read failure".to_string(),
            });
        }
        state
            .objects
            .get(location)
            .cloned()
            .ok_or_else(|| RemoteReadError::NotFound(location.to_string()))
    }

    async fn write(&self, content: &[u8], destination: &str) -> Result<(), RemoteWriteError> {
        let mut state = self.inner.lock();
        state.calls.push(RemoteCall::Write {
            destination: destination.to_string(),
            content: content.to_vec(),
        });
        if state.fail_writes {
            return Err(RemoteWriteError::Failed {
                destination: destination.to_string(),
                message: "injected write failure".to_string(),
            });
        }
        state
            .objects
            .insert(destination.to_string(), content.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
