// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! S3 backend driving the AWS CLI

use super::{append_to_existing, RemoteLogBackend, RemoteReadError, RemoteWriteError};
use crate::subprocess::{run_with_stdin, run_with_timeout};
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

/// S3 backend using `aws s3 cp` with content streamed over stdin/stdout.
///
/// Credentials and region come from the AWS CLI's own configuration.
#[derive(Clone, Debug)]
pub struct S3CliBackend {
    program: String,
    encrypt: bool,
    append: bool,
    timeout: Duration,
}

impl Default for S3CliBackend {
    fn default() -> Self {
        Self {
            program: crate::env::aws_binary(),
            encrypt: false,
            append: true,
            timeout: crate::env::remote_copy_timeout(),
        }
    }
}

impl S3CliBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request AES256 server-side encryption on upload.
    pub fn with_encryption(mut self, encrypt: bool) -> Self {
        self.encrypt = encrypt;
        self
    }

    /// Append to an existing object instead of replacing it (default: on).
    pub fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn upload_command(&self, destination: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["s3", "cp", "-", destination]);
        if self.encrypt {
            cmd.args(["--sse", "AES256"]);
        }
        cmd
    }
}

#[async_trait]
impl RemoteLogBackend for S3CliBackend {
    fn name(&self) -> &'static str {
        "s3"
    }

    async fn read(&self, location: &str) -> Result<Vec<u8>, RemoteReadError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["s3", "cp", location, "-"]);
        let output = run_with_timeout(cmd, self.timeout, "aws s3 cp")
            .await
            .map_err(|message| RemoteReadError::Failed {
                location: location.to_string(),
                message,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // The CLI reports missing keys as a 404 from HeadObject.
            if stderr.contains("404") || stderr.contains("Not Found") {
                return Err(RemoteReadError::NotFound(location.to_string()));
            }
            return Err(RemoteReadError::Failed {
                location: location.to_string(),
                message: stderr.trim().to_string(),
            });
        }
        Ok(output.stdout)
    }

    async fn write(&self, content: &[u8], destination: &str) -> Result<(), RemoteWriteError> {
        let body = if self.append {
            append_to_existing(self, content, destination).await
        } else {
            content.to_vec()
        };

        let output = run_with_stdin(
            self.upload_command(destination),
            &body,
            self.timeout,
            "aws s3 cp",
        )
        .await
        .map_err(|message| RemoteWriteError::Failed {
            destination: destination.to_string(),
            message,
        })?;

        if !output.status.success() {
            return Err(RemoteWriteError::Failed {
                destination: destination.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "s3_tests.rs"]
mod tests;
