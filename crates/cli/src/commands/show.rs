// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tasklog show` - Print a task's log

use anyhow::Result;
use clap::Args;
use tasklog_core::{LogConfig, TaskInstance, TaskState};
use tasklog_engine::{DefaultTaskLogging, TaskLogging};

use super::TaskArgs;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub task: TaskArgs,

    /// Task state (queued, running, success, failed, up_for_retry, skipped)
    #[arg(long)]
    pub state: Option<TaskState>,

    /// Attempt number
    #[arg(long, default_value_t = 1)]
    pub try_number: u32,

    /// Worker host that ran the task
    #[arg(long)]
    pub hostname: Option<String>,
}

impl ShowArgs {
    pub fn instance(&self) -> TaskInstance {
        TaskInstance {
            task: self.task.task_ref(),
            state: self.state,
            try_number: self.try_number,
            hostname: self.hostname.clone(),
        }
    }
}

pub async fn handle(args: ShowArgs, config: LogConfig) -> Result<()> {
    let logging = DefaultTaskLogging::new(config);
    let log = logging.read_task_logs(&args.instance()).await;
    print!("{log}");
    if !log.ends_with('\n') {
        println!();
    }
    Ok(())
}
