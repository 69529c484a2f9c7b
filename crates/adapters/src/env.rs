// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// AWS CLI binary used by the S3 backend (default: `aws`).
pub fn aws_binary() -> String {
    std::env::var("TASKLOG_AWS_BINARY")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "aws".to_string())
}

/// gsutil binary used by the GCS backend (default: `gsutil`).
pub fn gsutil_binary() -> String {
    std::env::var("TASKLOG_GSUTIL_BINARY")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "gsutil".to_string())
}

/// Timeout for a single remote copy (default: 120000ms).
pub fn remote_copy_timeout() -> Duration {
    parse_duration_ms("TASKLOG_REMOTE_TIMEOUT_MS").unwrap_or(crate::subprocess::REMOTE_COPY_TIMEOUT)
}
