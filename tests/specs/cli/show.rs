//! `tasklog show` specs

use crate::prelude::*;

#[test]
fn shows_local_log() {
    let folder = LogFolder::new();
    let config = folder.config("");
    folder.write_task_log("dag1", "task1", ISO, "INFO hello\n");

    cli()
        .args(&task_args("show", &["--config", config.to_str().unwrap()]))
        .passes()
        .stdout_eq("*** Reading local log.\nINFO hello\n");
}

#[test]
fn missing_local_log_falls_back_to_worker() {
    let folder = LogFolder::new();
    let config = folder.config("");
    let config_with_port = folder.path().join("tasklog-port.toml");
    std::fs::write(
        &config_with_port,
        format!(
            "{}\n[webserver]\nworker_log_server_port = 1\nlog_fetch_timeout_sec = 2\n",
            std::fs::read_to_string(&config).unwrap()
        ),
    )
    .unwrap();

    cli()
        .args(&task_args(
            "show",
            &[
                "--config",
                config_with_port.to_str().unwrap(),
                "--hostname",
                "127.0.0.1",
            ],
        ))
        .passes()
        .stdout_eq(
            "*** Log file isn't local.\n\
             *** Fetching here: http://127.0.0.1:1/log/dag1/task1/2017-01-01T12:00:00\n\
             *** Failed to fetch log file from worker.\n",
        );
}

#[test]
fn unsupported_remote_is_reported_before_local() {
    let folder = LogFolder::new();
    let config = folder.config("remote_base_log_folder = \"ftp://host/logs\"");
    folder.write_task_log("dag1", "task1", ISO, "INFO local\n");

    cli()
        .args(&task_args("show", &["--config", config.to_str().unwrap()]))
        .passes()
        .stdout_eq(
            "*** Reading remote log from ftp://host/logs/dag1/task1/2017-01-01T12:00:00.\n\
             *** Unsupported remote log location.\n\
             *** Reading local log.\nINFO local\n",
        );
}
