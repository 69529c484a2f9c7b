// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tasklog path` - Print where a task's log lives

use anyhow::Result;
use clap::Args;
use tasklog_core::log_paths::{remote_log_path, task_log_path};
use tasklog_core::{LogConfig, RemoteScheme};

use super::TaskArgs;

#[derive(Args)]
pub struct PathArgs {
    #[command(flatten)]
    pub task: TaskArgs,
}

/// `local: <path>` and, when shipping is enabled, `remote: <uri>`.
pub fn locations(args: &PathArgs, config: &LogConfig) -> Result<Vec<String>> {
    let task = args.task.task_ref();
    let local_base = config.base_log_folder();
    let local = task_log_path(&local_base, &task)?;

    let mut lines = vec![format!("local: {}", local.display())];
    if let Some(remote_base) = config.remote_base() {
        if RemoteScheme::parse(remote_base.value).is_enabled() {
            let remote = remote_log_path(&local, &local_base, remote_base.value)?;
            lines.push(format!("remote: {remote}"));
        }
    }
    Ok(lines)
}

pub fn handle(args: PathArgs, config: &LogConfig) -> Result<()> {
    for line in locations(&args, config)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
