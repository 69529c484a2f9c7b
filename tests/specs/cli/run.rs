//! `tasklog run` specs

use crate::prelude::*;
use std::path::{Path, PathBuf};

/// Fake `aws` CLI that records calls and stores uploads under `dir`
fn fake_aws(dir: &Path) -> PathBuf {
    let script = dir.join("aws");
    let body = format!(
        "#!/bin/sh\necho \"$*\" >> \"{dir}/calls\"\nif [ \"$3\" = \"-\" ]; then\n  cat > \"{dir}/uploaded\"\nelse\n  echo \"Not Found\" >&2\n  exit 1\nfi\n",
        dir = dir.display()
    );
    std::fs::write(&script, body).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
    script
}

#[test]
fn command_output_is_written_to_task_log() {
    let folder = LogFolder::new();
    let config = folder.config("");
    cli()
        .args(&task_args(
            "run",
            &["--config", config.to_str().unwrap(), "--", "echo", "hello"],
        ))
        .passes()
        .stdout_eq("hello\n");

    let content = std::fs::read_to_string(folder.task_log("dag1", "task1", ISO)).unwrap();
    assert!(content.contains("INFO hello\n"), "{content}");
}

#[test]
fn exit_code_of_command_is_returned() {
    let folder = LogFolder::new();
    let config = folder.config("");
    cli()
        .args(&task_args(
            "run",
            &["--config", config.to_str().unwrap(), "--", "sh", "-c", "exit 7"],
        ))
        .fails()
        .code_eq(7)
        .stderr_lacks("Error:");
}

#[test]
fn rerun_keeps_earlier_output() {
    let folder = LogFolder::new();
    let config = folder.config("");
    for word in ["first", "second"] {
        cli()
            .args(&task_args(
                "run",
                &["--config", config.to_str().unwrap(), "--", "echo", word],
            ))
            .passes();
    }

    let content = std::fs::read_to_string(folder.task_log("dag1", "task1", ISO)).unwrap();
    let first = content.find("INFO first").unwrap();
    let second = content.find("INFO second").unwrap();
    assert!(first < second, "{content}");
}

#[test]
fn unsupported_remote_location_is_logged_not_fatal() {
    let folder = LogFolder::new();
    let config = folder.config("remote_base_log_folder = \"ftp://host/path\"");
    cli()
        .args(&task_args(
            "run",
            &["--config", config.to_str().unwrap(), "--", "true"],
        ))
        .passes()
        .stderr_has("Unsupported remote log location");
}

#[cfg(unix)]
#[test]
fn log_is_shipped_to_s3_via_deprecated_alias() {
    let folder = LogFolder::new();
    let aws = fake_aws(folder.path());
    let config = folder.config("s3_log_folder = \"s3://legacy\"");

    cli()
        .args(&task_args(
            "run",
            &["--config", config.to_str().unwrap(), "--", "echo", "shipped line"],
        ))
        .env("TASKLOG_AWS_BINARY", &aws)
        .passes()
        .stderr_has("has been replaced by");

    let calls = std::fs::read_to_string(folder.path().join("calls")).unwrap();
    assert!(
        calls.contains("s3 cp - s3://legacy/dag1/task1/2017-01-01T12:00:00"),
        "{calls}"
    );
    let uploaded = std::fs::read_to_string(folder.path().join("uploaded")).unwrap();
    assert!(uploaded.contains("INFO shipped line\n"), "{uploaded}");
}

#[cfg(unix)]
#[test]
fn shipping_failure_does_not_change_exit_code() {
    let folder = LogFolder::new();
    let config = folder.config("remote_base_log_folder = \"s3://bucket/logs\"");

    cli()
        .args(&task_args(
            "run",
            &["--config", config.to_str().unwrap(), "--", "true"],
        ))
        .env("TASKLOG_AWS_BINARY", "false")
        .passes()
        .stderr_has("failed to ship task log");
}
