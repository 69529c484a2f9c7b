// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tasklog-core: task identity, log layout, and configuration

pub mod config;
pub mod env;
pub mod execution_date;
pub mod id;
pub mod log_paths;
pub mod remote;
pub mod task;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{ConfigError, ConfigKey, CoreConfig, LogConfig, Resolved, WebserverConfig};
pub use execution_date::{ExecutionDate, ExecutionDateError};
pub use log_paths::PathError;
pub use remote::{RemoteDestination, RemoteScheme};
pub use task::{DagId, TaskExecutionRef, TaskId, TaskInstance, TaskState};
