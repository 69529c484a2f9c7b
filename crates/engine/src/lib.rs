// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Task log lifecycle: local capture, finalization, and remote shipping

mod error;
pub mod format;
mod lifecycle;
mod logger;
pub mod perms;
mod reader;
mod ship;
mod sink;

#[cfg(test)]
mod test_helpers;

pub use error::{LoggingError, ShipError};
pub use format::LogTemplate;
pub use lifecycle::{DefaultTaskLogging, TaskLogging};
pub use logger::{TaskLogger, TASK_TARGET};
pub use reader::read_task_logs;
pub use ship::{ship_task_log, ShipOutcome};
pub use sink::{LocalLogSink, SinkSettings};
