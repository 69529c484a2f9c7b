// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! GCS backend driving gsutil

use super::{append_to_existing, RemoteLogBackend, RemoteReadError, RemoteWriteError};
use crate::subprocess::{run_with_stdin, run_with_timeout};
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

/// GCS backend using `gsutil cat` and `gsutil cp -`.
#[derive(Clone, Debug)]
pub struct GcsCliBackend {
    program: String,
    append: bool,
    timeout: Duration,
}

impl Default for GcsCliBackend {
    fn default() -> Self {
        Self {
            program: crate::env::gsutil_binary(),
            append: true,
            timeout: crate::env::remote_copy_timeout(),
        }
    }
}

impl GcsCliBackend {
    pub fn new() -> Self {
        Self::default()
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
}

#[async_trait]
impl RemoteLogBackend for GcsCliBackend {
    fn name(&self) -> &'static str {
        "gcs"
    }

    async fn read(&self, location: &str) -> Result<Vec<u8>, RemoteReadError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["cat", location]);
        let output = run_with_timeout(cmd, self.timeout, "gsutil cat")
            .await
            .map_err(|message| RemoteReadError::Failed {
                location: location.to_string(),
                message,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("No URLs matched") {
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

        let mut cmd = Command::new(&self.program);
        cmd.args(["cp", "-", destination]);
        let output = run_with_stdin(cmd, &body, self.timeout, "gsutil cp")
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
#[path = "gcs_tests.rs"]
mod tests;
