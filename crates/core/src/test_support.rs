// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{ExecutionDate, LogConfig, TaskExecutionRef};
use std::path::Path;

/// Build a task reference from string parts.
///
/// Panics on an unparseable date; only used with literal fixtures.
#[allow(clippy::expect_used)]
pub fn task_ref(dag_id: &str, task_id: &str, execution_date: &str) -> TaskExecutionRef {
    TaskExecutionRef::new(
        dag_id,
        task_id,
        ExecutionDate::parse(execution_date).expect("fixture execution date"),
    )
}

/// Configuration rooted at `base_dir` with the given remote base.
pub fn config_with(base_dir: &Path, remote_base: Option<&str>) -> LogConfig {
    let mut config = LogConfig::default();
    config.core.base_log_folder = base_dir.display().to_string();
    config.core.remote_base_log_folder = remote_base.map(str::to_string);
    config
}
