// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for task log handling

use std::path::PathBuf;

use tasklog_adapters::RemoteWriteError;
use tasklog_core::{ConfigError, PathError, TaskExecutionRef};
use thiserror::Error;

/// Errors that stop task logging from being set up
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to prepare task log at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to sync task log {path}: {source}")]
    Sync {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("task log sink is busy with {active}; cannot start {requested}")]
    SinkBusy {
        active: TaskExecutionRef,
        requested: TaskExecutionRef,
    },
    #[error("no active task log for {0}")]
    NotActive(TaskExecutionRef),
}

/// Errors from shipping a finalized log. Logged, never raised to the task.
#[derive(Debug, Error)]
pub enum ShipError {
    #[error("unsupported remote log location: {0}")]
    UnsupportedDestination(String),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("failed to read local log {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Remote(#[from] RemoteWriteError),
}
