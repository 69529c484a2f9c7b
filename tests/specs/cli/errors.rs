//! CLI error reporting specs

use crate::prelude::*;

#[test]
fn invalid_execution_date_is_rejected() {
    cli()
        .args(&[
            "path",
            "--dag",
            "d",
            "--task",
            "t",
            "--execution-date",
            "not-a-date",
        ])
        .fails()
        .stderr_has("invalid execution date");
}

#[test]
fn missing_config_file_is_reported() {
    let folder = LogFolder::new();
    let missing = folder.path().join("missing.toml");
    cli()
        .args(&task_args("path", &["--config", missing.to_str().unwrap()]))
        .fails()
        .stderr_has("Error: failed to load configuration");
}

#[test]
fn unknown_logging_level_fails_before_running() {
    let folder = LogFolder::new();
    let config = folder.config("logging_level = \"LOUD\"");
    cli()
        .args(&task_args(
            "run",
            &["--config", config.to_str().unwrap(), "--", "true"],
        ))
        .fails()
        .stderr_has("LOUD");
    assert!(!folder.task_log("dag1", "task1", ISO).exists());
}

#[test]
fn dag_id_outside_log_folder_is_rejected() {
    let folder = LogFolder::new();
    let config = folder.config("");
    let escape = folder.path().join("escape");
    cli()
        .args(&[
            "run",
            "--config",
            config.to_str().unwrap(),
            "--dag",
            escape.to_str().unwrap(),
            "--task",
            "task1",
            "--execution-date",
            ISO,
            "--",
            "true",
        ])
        .fails()
        .stderr_has("invalid dag_id");
    assert!(!escape.exists());
}
