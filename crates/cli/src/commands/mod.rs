// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod path;
pub mod run;
pub mod show;

use clap::Args;
use tasklog_core::{ExecutionDate, TaskExecutionRef};

/// Identity of one task run, shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct TaskArgs {
    /// DAG id
    #[arg(long = "dag")]
    pub dag_id: String,

    /// Task id
    #[arg(long = "task")]
    pub task_id: String,

    /// Execution date (e.g. 2017-01-01T12:00:00)
    #[arg(long)]
    pub execution_date: ExecutionDate,
}

impl TaskArgs {
    pub fn task_ref(&self) -> TaskExecutionRef {
        TaskExecutionRef::new(
            self.dag_id.as_str(),
            self.task_id.as_str(),
            self.execution_date,
        )
    }
}
