// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assemble the readable log of a task instance.
//!
//! Sections are concatenated in order: the remote copy (if a remote base
//! is configured), then the local file, or the worker's copy when the
//! file is not on this host.

use tasklog_adapters::{BackendRegistry, RemoteReadError, Route, WorkerLogFetcher};
use tasklog_core::log_paths::{
    relative_log_path, remote_task_log_path, validate_task_ids, worker_log_url,
};
use tasklog_core::{LogConfig, RemoteDestination, TaskInstance};

pub async fn read_task_logs(
    config: &LogConfig,
    registry: &BackendRegistry,
    fetcher: &dyn WorkerLogFetcher,
    instance: &TaskInstance,
) -> String {
    if let Err(e) = validate_task_ids(&instance.task) {
        tracing::warn!(task = %instance.task, error = %e, "refusing to read task log");
        return format!("*** Cannot locate log: {e}.\n");
    }
    let relative = relative_log_path(&instance.task);
    let mut log = String::new();
    let mut remote_loaded = false;

    if let Some(remote_base) = config.remote_base() {
        let remote_path = remote_task_log_path(remote_base.value, &instance.task);
        let mut remote_log = String::new();

        match registry.route(&RemoteDestination::new(remote_base.value)) {
            Route::Disabled => {}
            Route::Unsupported => remote_log.push_str("*** Unsupported remote log location."),
            Route::Backend(backend) => {
                remote_loaded = true;
                match backend.read(&remote_path).await {
                    Ok(bytes) => remote_log.push_str(&String::from_utf8_lossy(&bytes)),
                    Err(e) => {
                        if !matches!(e, RemoteReadError::NotFound(_)) {
                            tracing::error!(location = %remote_path, error = %e, "remote log read failed");
                        }
                        if instance.should_surface_remote_errors() {
                            remote_log.push_str(&format!("Could not read logs from {remote_path}"));
                        }
                    }
                }
            }
        }

        if !remote_log.is_empty() {
            log.push_str(&format!(
                "*** Reading remote log from {remote_path}.\n{remote_log}\n"
            ));
        }
    }

    // Local output is still growing while the task runs, even when a
    // remote copy of earlier attempts exists.
    if !remote_loaded || instance.is_running() {
        let local_path = config.base_log_folder().join(&relative);
        if local_path.exists() {
            match std::fs::read(&local_path) {
                Ok(bytes) => {
                    log.push_str("*** Reading local log.\n");
                    log.push_str(&String::from_utf8_lossy(&bytes));
                }
                Err(e) => {
                    tracing::warn!(path = %local_path.display(), error = %e, "failed to read local log");
                    log.push_str(&format!(
                        "*** Failed to load local log file: {}.\n",
                        local_path.display()
                    ));
                }
            }
        } else {
            let hostname = instance.hostname.as_deref().unwrap_or_default();
            let url = worker_log_url(hostname, config.webserver.worker_log_server_port, &instance.task);
            log.push_str("*** Log file isn't local.\n");
            log.push_str(&format!("*** Fetching here: {url}\n"));
            match fetcher.fetch(&url).await {
                Ok(body) => {
                    log.push('\n');
                    log.push_str(&body);
                }
                Err(e) => {
                    tracing::debug!(url = %url, error = %e, "worker log fetch failed");
                    log.push_str("*** Failed to fetch log file from worker.\n");
                }
            }
        }
    }

    log
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
