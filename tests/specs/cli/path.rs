//! `tasklog path` specs

use crate::prelude::*;

#[test]
fn prints_local_location() {
    let folder = LogFolder::new();
    let config = folder.config("");
    cli()
        .args(&task_args("path", &["--config", config.to_str().unwrap()]))
        .passes()
        .stdout_eq(&format!(
            "local: {}\n",
            folder.task_log("dag1", "task1", ISO).display()
        ));
}

#[test]
fn prints_remote_location_when_configured() {
    let folder = LogFolder::new();
    let config = folder.config("remote_base_log_folder = \"s3://bucket/logs\"");
    cli()
        .args(&task_args("path", &["--config", config.to_str().unwrap()]))
        .passes()
        .stdout_has("remote: s3://bucket/logs/dag1/task1/2017-01-01T12:00:00\n");
}

#[test]
fn environment_overrides_config_file() {
    let folder = LogFolder::new();
    let config = folder.config("");
    cli()
        .args(&task_args("path", &["--config", config.to_str().unwrap()]))
        .env("TASKLOG__CORE__REMOTE_BASE_LOG_FOLDER", "gs://other")
        .passes()
        .stdout_has("remote: gs://other/dag1/task1/2017-01-01T12:00:00\n");
}

#[test]
fn config_from_environment_variable() {
    let folder = LogFolder::new();
    let config = folder.config("");
    cli()
        .args(&task_args("path", &[]))
        .env("TASKLOG_CONFIG", &config)
        .passes()
        .stdout_has(&folder.base().display().to_string());
}
