// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task identity as supplied by the executing system.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::execution_date::ExecutionDate;

crate::define_id! {
    /// Identifier of the DAG a task belongs to.
    pub struct DagId;
}

crate::define_id! {
    /// Identifier of a task within its DAG.
    pub struct TaskId;
}

/// Identifies one task run. Immutable; owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskExecutionRef {
    pub dag_id: DagId,
    pub task_id: TaskId,
    pub execution_date: ExecutionDate,
}

impl TaskExecutionRef {
    pub fn new(
        dag_id: impl Into<DagId>,
        task_id: impl Into<TaskId>,
        execution_date: ExecutionDate,
    ) -> Self {
        Self {
            dag_id: dag_id.into(),
            task_id: task_id.into(),
            execution_date,
        }
    }
}

impl fmt::Display for TaskExecutionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}@{}",
            self.dag_id, self.task_id, self.execution_date
        )
    }
}

/// Run state of a task instance, as reported by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Queued,
    Running,
    Success,
    Failed,
    UpForRetry,
    Skipped,
}

impl TaskState {
    /// Whether the run completed and therefore shipped its log.
    pub fn is_completed(self) -> bool {
        matches!(self, TaskState::Success | TaskState::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskState::Queued => "queued",
            TaskState::Running => "running",
            TaskState::Success => "success",
            TaskState::Failed => "failed",
            TaskState::UpForRetry => "up_for_retry",
            TaskState::Skipped => "skipped",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "queued" => Ok(TaskState::Queued),
            "running" => Ok(TaskState::Running),
            "success" => Ok(TaskState::Success),
            "failed" => Ok(TaskState::Failed),
            "up_for_retry" => Ok(TaskState::UpForRetry),
            "skipped" => Ok(TaskState::Skipped),
            other => Err(format!("unknown task state: {other}")),
        }
    }
}

/// Everything needed to locate and present a task's logs after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInstance {
    pub task: TaskExecutionRef,
    pub state: Option<TaskState>,
    pub try_number: u32,
    /// Worker host that ran (or is running) the task.
    pub hostname: Option<String>,
}

impl TaskInstance {
    pub fn new(task: TaskExecutionRef) -> Self {
        Self {
            task,
            state: None,
            try_number: 1,
            hostname: None,
        }
    }

    pub fn with_state(mut self, state: TaskState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_try_number(mut self, try_number: u32) -> Self {
        self.try_number = try_number;
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn is_running(&self) -> bool {
        self.state == Some(TaskState::Running)
    }

    /// Remote retrieval errors are only worth showing once a remote log
    /// can be expected to exist.
    pub fn should_surface_remote_errors(&self) -> bool {
        self.state.is_some_and(TaskState::is_completed) || self.try_number > 1
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
