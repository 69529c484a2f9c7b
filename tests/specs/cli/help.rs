//! CLI help output specs

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("path")
        .stdout_has("show");
}

#[test]
fn run_help_shows_task_flags() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--dag")
        .stdout_has("--task")
        .stdout_has("--execution-date");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
