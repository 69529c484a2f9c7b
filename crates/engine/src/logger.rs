// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handle to a task's active log destination

use std::future::Future;
use std::path::{Path, PathBuf};

use tasklog_core::TaskExecutionRef;
use tracing::dispatcher::DefaultGuard;
use tracing::instrument::{WithDispatch, WithSubscriber};
use tracing::{Dispatch, Level};

/// Target used for lines recorded through [`TaskLogger::log`].
pub const TASK_TARGET: &str = "task";

/// Cloneable handle to the dispatcher bound to one task's log file.
///
/// Nothing is routed to the file implicitly: callers enter the handle
/// (thread scope), wrap a future with [`TaskLogger::scope`], or write
/// lines through [`TaskLogger::log`]. Events sent after the sink has
/// been detached are discarded.
#[derive(Clone)]
pub struct TaskLogger {
    task: TaskExecutionRef,
    path: PathBuf,
    dispatch: Dispatch,
}

impl TaskLogger {
    pub(crate) fn new(task: TaskExecutionRef, path: PathBuf, dispatch: Dispatch) -> Self {
        Self {
            task,
            path,
            dispatch,
        }
    }

    pub fn task(&self) -> &TaskExecutionRef {
        &self.task
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Route this thread's events to the task log until the guard drops.
    #[must_use = "the task log is only the default while the guard is alive"]
    pub fn enter(&self) -> DefaultGuard {
        tracing::dispatcher::set_default(&self.dispatch)
    }

    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Route events emitted while `future` is polled to the task log.
    pub fn scope<F: Future>(&self, future: F) -> WithDispatch<F> {
        future.with_subscriber(self.dispatch.clone())
    }

    /// Record one line at `level`.
    pub fn log(&self, level: Level, message: &str) {
        self.in_scope(|| match level {
            Level::TRACE => tracing::trace!(target: TASK_TARGET, "{}", message),
            Level::DEBUG => tracing::debug!(target: TASK_TARGET, "{}", message),
            Level::INFO => tracing::info!(target: TASK_TARGET, "{}", message),
            Level::WARN => tracing::warn!(target: TASK_TARGET, "{}", message),
            Level::ERROR => tracing::error!(target: TASK_TARGET, "{}", message),
        })
    }
}

impl std::fmt::Debug for TaskLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskLogger")
            .field("task", &self.task)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
