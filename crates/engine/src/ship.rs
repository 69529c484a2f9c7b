// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Relay a finalized task log to its remote destination.

use std::path::PathBuf;

use tasklog_adapters::{BackendRegistry, Route};
use tasklog_core::log_paths::{remote_log_path, task_log_path};
use tasklog_core::{LogConfig, RemoteDestination, RemoteScheme, TaskExecutionRef};

use crate::error::ShipError;

/// What happened to a finalized log.
#[derive(Debug)]
pub enum ShipOutcome {
    /// No remote base is configured.
    NotConfigured,
    /// The remote base is the literal `None`.
    Disabled,
    /// Nothing was written locally for this task.
    MissingLocalFile(PathBuf),
    Shipped { destination: String, bytes: usize },
    /// Shipping was attempted and failed. Already logged.
    Failed(ShipError),
}

impl ShipOutcome {
    pub fn is_shipped(&self) -> bool {
        matches!(self, ShipOutcome::Shipped { .. })
    }
}

/// Ship the local log for `task`, if a remote base is configured.
///
/// Never returns an error: every failure is logged and reported as
/// [`ShipOutcome::Failed`].
pub async fn ship_task_log(
    config: &LogConfig,
    registry: &BackendRegistry,
    task: &TaskExecutionRef,
) -> ShipOutcome {
    let Some(remote_base) = config.remote_base() else {
        return ShipOutcome::NotConfigured;
    };
    let remote_base = remote_base.value;
    if !RemoteScheme::parse(remote_base).is_enabled() {
        return ShipOutcome::Disabled;
    }

    let local_base = config.base_log_folder();
    let local_path = match task_log_path(&local_base, task) {
        Ok(path) => path,
        Err(e) => {
            tracing::error!(task = %task, error = %e, "cannot locate task log");
            return ShipOutcome::Failed(e.into());
        }
    };
    if !local_path.exists() {
        tracing::debug!(task = %task, path = %local_path.display(), "no local log to ship");
        return ShipOutcome::MissingLocalFile(local_path);
    }

    let content = match std::fs::read(&local_path) {
        Ok(content) => content,
        Err(source) => {
            let error = ShipError::Read {
                path: local_path,
                source,
            };
            tracing::error!(task = %task, error = %error, "failed to read task log for shipping");
            return ShipOutcome::Failed(error);
        }
    };

    let destination = match remote_log_path(&local_path, &local_base, remote_base) {
        Ok(uri) => RemoteDestination {
            scheme: RemoteScheme::parse(remote_base),
            uri,
        },
        Err(e) => {
            tracing::error!(task = %task, error = %e, "cannot map task log to remote location");
            return ShipOutcome::Failed(e.into());
        }
    };

    match registry.route(&destination) {
        Route::Disabled => ShipOutcome::Disabled,
        Route::Unsupported => {
            tracing::error!(remote_base, "Unsupported remote log location");
            ShipOutcome::Failed(ShipError::UnsupportedDestination(remote_base.to_string()))
        }
        Route::Backend(backend) => match backend.write(&content, &destination.uri).await {
            Ok(()) => {
                tracing::info!(task = %task, destination = %destination, "shipped task log");
                ShipOutcome::Shipped {
                    destination: destination.uri,
                    bytes: content.len(),
                }
            }
            Err(e) => {
                tracing::error!(task = %task, error = %e, "failed to ship task log");
                ShipOutcome::Failed(e.into())
            }
        },
    }
}

#[cfg(test)]
#[path = "ship_tests.rs"]
mod tests;
