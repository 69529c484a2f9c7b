// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task log lifecycle: set up before a task runs, finalize and ship after.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tasklog_adapters::{BackendRegistry, HttpWorkerLogFetcher, TracedFetcher, WorkerLogFetcher};
use tasklog_core::{LogConfig, TaskExecutionRef, TaskInstance};

use crate::error::LoggingError;
use crate::logger::TaskLogger;
use crate::reader;
use crate::ship::{self, ShipOutcome};
use crate::sink::{LocalLogSink, SinkSettings};

/// Hooks invoked by whatever executes tasks.
///
/// Deployments can supply their own implementation in place of
/// [`DefaultTaskLogging`].
#[async_trait]
pub trait TaskLogging: Send + Sync {
    /// Prepare the task's log destination. Failure here should stop the task.
    fn pre_task_logging(&self, task: &TaskExecutionRef) -> Result<(), LoggingError>;

    /// Handle to the active destination, valid between pre and post.
    fn get_task_logger(&self, task: &TaskExecutionRef) -> Result<TaskLogger, LoggingError>;

    /// Flush and release the destination, then ship the log if configured.
    async fn post_task_logging(&self, task: &TaskExecutionRef) -> ShipOutcome;

    /// Human-readable log of a task instance from wherever it is stored.
    async fn read_task_logs(&self, instance: &TaskInstance) -> String;
}

enum SinkState {
    Idle,
    Active(LocalLogSink),
}

/// Local file logging with optional remote shipping.
///
/// Owns at most one active sink.
pub struct DefaultTaskLogging {
    config: LogConfig,
    registry: BackendRegistry,
    fetcher: Arc<dyn WorkerLogFetcher>,
    state: Mutex<SinkState>,
}

impl DefaultTaskLogging {
    /// Default S3/GCS backends and an HTTP worker fetcher.
    pub fn new(config: LogConfig) -> Self {
        let registry = BackendRegistry::with_defaults(&config);
        let fetcher = Arc::new(TracedFetcher::new(HttpWorkerLogFetcher::new(
            config.log_fetch_timeout(),
        )));
        Self::with_adapters(config, registry, fetcher)
    }

    pub fn with_adapters(
        config: LogConfig,
        registry: BackendRegistry,
        fetcher: Arc<dyn WorkerLogFetcher>,
    ) -> Self {
        Self {
            config,
            registry,
            fetcher,
            state: Mutex::new(SinkState::Idle),
        }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Task whose sink is currently attached, if any.
    pub fn active_task(&self) -> Option<TaskExecutionRef> {
        match &*self.state.lock() {
            SinkState::Idle => None,
            SinkState::Active(sink) => Some(sink.task().clone()),
        }
    }

    /// Detach the sink for `task`, leaving any other task's sink alone.
    fn detach(&self, task: &TaskExecutionRef) {
        let mut state = self.state.lock();
        let sink = match std::mem::replace(&mut *state, SinkState::Idle) {
            SinkState::Active(sink) if sink.task() == task => sink,
            other => {
                if let SinkState::Active(sink) = &other {
                    tracing::warn!(
                        active = %sink.task(),
                        requested = %task,
                        "finalizing a task whose sink is not attached"
                    );
                }
                *state = other;
                return;
            }
        };
        drop(state);
        match sink.detach() {
            Ok(path) => tracing::debug!(task = %task, path = %path.display(), "task log detached"),
            Err(e) => tracing::error!(task = %task, error = %e, "task log not synced"),
        }
    }
}

#[async_trait]
impl TaskLogging for DefaultTaskLogging {
    fn pre_task_logging(&self, task: &TaskExecutionRef) -> Result<(), LoggingError> {
        let settings = SinkSettings::from_config(&self.config)?;
        let mut state = self.state.lock();

        if let SinkState::Active(active) = &*state {
            if active.task() != task {
                return Err(LoggingError::SinkBusy {
                    active: active.task().clone(),
                    requested: task.clone(),
                });
            }
        }
        // Re-attaching the same task replaces its binding
        if let SinkState::Active(previous) = std::mem::replace(&mut *state, SinkState::Idle) {
            if let Err(e) = previous.detach() {
                tracing::warn!(task = %task, error = %e, "previous task log not synced");
            }
        }

        let sink = LocalLogSink::attach(&self.config.base_log_folder(), task, &settings)?;
        tracing::debug!(task = %task, path = %sink.path().display(), "task log attached");
        *state = SinkState::Active(sink);
        Ok(())
    }

    fn get_task_logger(&self, task: &TaskExecutionRef) -> Result<TaskLogger, LoggingError> {
        match &*self.state.lock() {
            SinkState::Active(sink) if sink.task() == task => Ok(sink.logger()),
            _ => Err(LoggingError::NotActive(task.clone())),
        }
    }

    async fn post_task_logging(&self, task: &TaskExecutionRef) -> ShipOutcome {
        self.detach(task);
        ship::ship_task_log(&self.config, &self.registry, task).await
    }

    async fn read_task_logs(&self, instance: &TaskInstance) -> String {
        reader::read_task_logs(&self.config, &self.registry, self.fetcher.as_ref(), instance).await
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
