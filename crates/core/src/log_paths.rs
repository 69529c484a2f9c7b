// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared path builders for task log files.
//!
//! Used by both the sink (writer) and the log reader to construct
//! consistent paths. The layout is a compatibility contract with
//! downstream log readers:
//!   `<base_log_folder>/<dag_id>/<task_id>/<iso_execution_date>`
//!
//! Remote locations keep the same relative path under the remote base.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::task::TaskExecutionRef;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("log path {path} is not under base log folder {base}")]
    NotUnderBase { path: PathBuf, base: PathBuf },
    #[error("log path is not valid UTF-8: {0}")]
    NonUtf8(PathBuf),
    #[error("invalid {field} {value:?}: must be a single path segment")]
    InvalidId { field: &'static str, value: String },
}

/// Check that the task's ids each form exactly one path segment.
///
/// Empty ids, `.`, `..`, and ids containing a separator or NUL are
/// rejected, so a task log can never land outside its base folder.
pub fn validate_task_ids(task: &TaskExecutionRef) -> Result<(), PathError> {
    check_segment("dag_id", task.dag_id.as_str())?;
    check_segment("task_id", task.task_id.as_str())
}

fn check_segment(field: &'static str, value: &str) -> Result<(), PathError> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\', '\0']) {
        return Err(PathError::InvalidId {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Relative log path for a task run.
///
/// Structure: `{dag_id}/{task_id}/{iso_execution_date}`
pub fn relative_log_path(task: &TaskExecutionRef) -> String {
    format!(
        "{}/{}/{}",
        task.dag_id,
        task.task_id,
        task.execution_date.to_iso()
    )
}

/// Build the directory holding every attempt log of a task.
///
/// Structure: `{base_dir}/{dag_id}/{task_id}`
pub fn task_log_dir(base_dir: &Path, task: &TaskExecutionRef) -> Result<PathBuf, PathError> {
    validate_task_ids(task)?;
    Ok(base_dir.join(task.dag_id.as_str()).join(task.task_id.as_str()))
}

/// Build the path to a task log file.
///
/// Structure: `{base_dir}/{dag_id}/{task_id}/{iso_execution_date}`
///
/// # Arguments
/// * `base_dir` - Base log folder (e.g., `/var/log/tasklog`)
/// * `task` - Task run identity
pub fn task_log_path(base_dir: &Path, task: &TaskExecutionRef) -> Result<PathBuf, PathError> {
    Ok(task_log_dir(base_dir, task)?.join(task.execution_date.to_iso()))
}

/// Rewrite a local log path onto the remote base.
///
/// The local base must be a prefix of `local_path`; anything else is
/// reported as [`PathError::NotUnderBase`] rather than producing an
/// unsubstituted location.
///
/// `/var/log/dag1/task1/2017-01-01T12:00:00` under `/var/log` with remote
/// base `s3://bucket/logs` becomes
/// `s3://bucket/logs/dag1/task1/2017-01-01T12:00:00`.
pub fn remote_log_path(
    local_path: &Path,
    local_base: &Path,
    remote_base: &str,
) -> Result<String, PathError> {
    let relative = local_path
        .strip_prefix(local_base)
        .map_err(|_| PathError::NotUnderBase {
            path: local_path.to_path_buf(),
            base: local_base.to_path_buf(),
        })?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(
                segment
                    .to_str()
                    .ok_or_else(|| PathError::NonUtf8(local_path.to_path_buf()))?,
            ),
            _ => {
                return Err(PathError::NotUnderBase {
                    path: local_path.to_path_buf(),
                    base: local_base.to_path_buf(),
                })
            }
        }
    }

    Ok(join_remote(remote_base, &segments.join("/")))
}

/// Remote location of a task log, built directly from the task identity.
pub fn remote_task_log_path(remote_base: &str, task: &TaskExecutionRef) -> String {
    join_remote(remote_base, &relative_log_path(task))
}

/// Join a relative key onto a remote base with exactly one separator.
pub fn join_remote(remote_base: &str, relative: &str) -> String {
    let relative = relative.trim_start_matches('/');
    if relative.is_empty() {
        return remote_base.to_string();
    }
    format!("{}/{}", remote_base.trim_end_matches('/'), relative)
}

/// URL of a task log served by the worker's log server.
///
/// Structure: `http://{hostname}:{port}/log/{dag_id}/{task_id}/{iso_execution_date}`
pub fn worker_log_url(hostname: &str, port: u16, task: &TaskExecutionRef) -> String {
    format!(
        "http://{}:{}/log/{}",
        hostname,
        port,
        relative_log_path(task)
    )
}

/// Expand a leading `~` to the current user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
#[path = "log_paths_tests.rs"]
mod tests;
