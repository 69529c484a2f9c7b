// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tasklog - task log capture and shipping CLI

mod commands;
mod exit_error;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{path, run, show};
use tasklog_core::LogConfig;

#[derive(Parser)]
#[command(
    name = "tasklog",
    version,
    about = "Capture task logs locally and ship them to remote storage"
)]
struct Cli {
    /// Configuration file (TOML); defaults to $TASKLOG_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command with its output captured in the task log
    Run(run::RunArgs),
    /// Print the local and remote log locations of a task
    Path(path::PathArgs),
    /// Print a task's log from wherever it is stored
    Show(show::ShowArgs),
}

#[tokio::main]
async fn main() {
    let log_guard = init_tracing();
    let result = run().await;
    // Flush diagnostics before exit skips destructors
    drop(log_guard);
    if let Err(e) = result {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Operator diagnostics go to stderr; `RUST_LOG` overrides the default.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking))
        .try_init();
    guard
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn load_config(path: Option<PathBuf>) -> Result<LogConfig> {
    let path = path.or_else(|| tasklog_core::env::config_path().map(PathBuf::from));
    LogConfig::load(path.as_deref()).context("failed to load configuration")
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = load_config(cli.config)?;

    match command {
        Commands::Run(args) => {
            let code = run::handle(args, config).await?;
            if code != 0 {
                return Err(exit_error::ExitError::new(code, String::new()).into());
            }
        }
        Commands::Path(args) => path::handle(args, &config)?,
        Commands::Show(args) => show::handle(args, config).await?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
