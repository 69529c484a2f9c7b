// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheme-to-backend dispatch

use std::collections::HashMap;
use std::sync::Arc;

use tasklog_core::remote::{GCS_SCHEME, S3_SCHEME};
use tasklog_core::{LogConfig, RemoteDestination, RemoteScheme};

use super::{GcsCliBackend, RemoteLogBackend, S3CliBackend};
use crate::traced::TracedBackend;

/// Where a destination should be sent.
pub enum Route {
    /// Shipping disabled (empty or `None` remote base).
    Disabled,
    /// No backend is registered for the destination's scheme.
    Unsupported,
    Backend(Arc<dyn RemoteLogBackend>),
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Disabled => f.write_str("Disabled"),
            Route::Unsupported => f.write_str("Unsupported"),
            Route::Backend(backend) => write!(f, "Backend({})", backend.name()),
        }
    }
}

/// Maps URI schemes to remote backends.
///
/// Open for extension: registering a scheme adds a destination family
/// without touching the lifecycle controller.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    backends: HashMap<String, Arc<dyn RemoteLogBackend>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// S3 (`s3://`) and GCS (`gs://`) CLI backends, traced.
    pub fn with_defaults(config: &LogConfig) -> Self {
        let mut registry = Self::new();
        registry.register(
            S3_SCHEME,
            Arc::new(TracedBackend::new(
                S3CliBackend::new().with_encryption(config.core.encrypt_s3_logs),
            )),
        );
        registry.register(GCS_SCHEME, Arc::new(TracedBackend::new(GcsCliBackend::new())));
        registry
    }

    /// Register `backend` for `scheme`, returning any backend it replaces.
    pub fn register(
        &mut self,
        scheme: &str,
        backend: Arc<dyn RemoteLogBackend>,
    ) -> Option<Arc<dyn RemoteLogBackend>> {
        self.backends.insert(scheme.to_ascii_lowercase(), backend)
    }

    pub fn get(&self, scheme: &RemoteScheme) -> Option<Arc<dyn RemoteLogBackend>> {
        let key = scheme.key()?;
        self.backends.get(&key.to_ascii_lowercase()).cloned()
    }

    pub fn route(&self, destination: &RemoteDestination) -> Route {
        if !destination.scheme.is_enabled() {
            return Route::Disabled;
        }
        match self.get(&destination.scheme) {
            Some(backend) => Route::Backend(backend),
            None => Route::Unsupported,
        }
    }

    pub fn schemes(&self) -> Vec<&str> {
        let mut schemes: Vec<&str> = self.backends.keys().map(String::as_str).collect();
        schemes.sort_unstable();
        schemes
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
