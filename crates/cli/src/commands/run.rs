// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tasklog run -- <command>` - Run a command inside the task log lifecycle

use std::process::Stdio;

use anyhow::{bail, Context, Result};
use clap::Args;
use tasklog_core::LogConfig;
use tasklog_engine::{DefaultTaskLogging, ShipOutcome, TaskLogger, TaskLogging};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::Level;

use super::TaskArgs;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub task: TaskArgs,

    /// Command and arguments to run
    #[arg(last = true, required = true)]
    pub command: Vec<String>,
}

pub async fn handle(args: RunArgs, config: LogConfig) -> Result<i32> {
    let logging = DefaultTaskLogging::new(config);
    execute(&logging, &args).await
}

/// Run the command between `pre` and `post`, returning its exit code.
///
/// Shipping problems never change the exit code.
pub async fn execute(logging: &dyn TaskLogging, args: &RunArgs) -> Result<i32> {
    let task = args.task.task_ref();
    let Some((program, program_args)) = args.command.split_first() else {
        bail!("no command given");
    };

    logging
        .pre_task_logging(&task)
        .with_context(|| format!("failed to set up task log for {task}"))?;
    let logger = logging.get_task_logger(&task)?;
    logger.log(Level::INFO, &format!("Running command: {}", args.command.join(" ")));

    let result = run_command(&logger, program, program_args).await;
    match &result {
        Ok(code) => logger.log(Level::INFO, &format!("Command exited with return code {code}")),
        Err(e) => logger.log(Level::ERROR, &format!("Command failed: {e:#}")),
    }

    match logging.post_task_logging(&task).await {
        ShipOutcome::Shipped { destination, .. } => {
            tracing::debug!(destination = %destination, "task log shipped")
        }
        ShipOutcome::Failed(e) => tracing::debug!(error = %e, "task log not shipped"),
        _ => {}
    }

    result
}

async fn run_command(logger: &TaskLogger, program: &str, args: &[String]) -> Result<i32> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("failed to start {program}"))?;

    let stdout = child.stdout.take().context("child stdout not captured")?;
    let stderr = child.stderr.take().context("child stderr not captured")?;

    let (out, err, status) = tokio::join!(
        relay_lines(stdout, logger, false),
        relay_lines(stderr, logger, true),
        child.wait(),
    );
    out?;
    err?;
    let status = status.context("failed to wait for command")?;
    Ok(status.code().unwrap_or(1))
}

/// Record each line in the task log and echo it to the matching stream.
async fn relay_lines<R: AsyncRead + Unpin>(
    reader: R,
    logger: &TaskLogger,
    is_stderr: bool,
) -> std::io::Result<()> {
    let mut lines = BufReader::new(reader).lines();
    while let Some(line) = lines.next_line().await? {
        logger.log(Level::INFO, &line);
        if is_stderr {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
