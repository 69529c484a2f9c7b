// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local log file sink for one task run.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tasklog_core::log_paths::{task_log_dir, task_log_path};
use tasklog_core::{ConfigError, LogConfig, TaskExecutionRef};
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

use crate::error::LoggingError;
use crate::format::LogTemplate;
use crate::logger::TaskLogger;
use crate::perms::{create_dir_all_with_mode, create_file_with_mode, LOG_DIR_MODE, LOG_FILE_MODE};

/// Level and line template applied to task log files.
#[derive(Debug, Clone)]
pub struct SinkSettings {
    pub level: LevelFilter,
    pub template: LogTemplate,
}

impl SinkSettings {
    pub fn from_config(config: &LogConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            level: config.logging_level()?,
            template: LogTemplate::parse(&config.core.log_format),
        })
    }
}

/// Task log file shared by the formatting layer and its sink.
///
/// Each event is written straight to the file. Once closed, further
/// lines are dropped.
#[derive(Clone)]
struct SharedLogFile(Arc<Mutex<Option<File>>>);

impl SharedLogFile {
    fn new(file: File) -> Self {
        Self(Arc::new(Mutex::new(Some(file))))
    }

    /// Release the file after syncing its data to storage.
    fn close(&self) -> io::Result<()> {
        let Some(mut file) = self.0.lock().take() else {
            return Ok(());
        };
        file.flush()?;
        file.sync_data()
    }
}

struct SharedLogWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SharedLogWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter(self.0.lock())
    }
}

/// A task log file bound to its own dispatcher.
///
/// Lines reach the file as they are recorded; [`LocalLogSink::detach`]
/// syncs the file before it is read for shipping.
pub struct LocalLogSink {
    task: TaskExecutionRef,
    path: PathBuf,
    dispatch: Dispatch,
    file: SharedLogFile,
}

impl LocalLogSink {
    /// Create the log directory and file if needed and bind the file.
    ///
    /// Existing content is kept; new lines are appended.
    pub fn attach(
        base_dir: &Path,
        task: &TaskExecutionRef,
        settings: &SinkSettings,
    ) -> Result<Self, LoggingError> {
        let dir = task_log_dir(base_dir, task)?;
        create_dir_all_with_mode(&dir, LOG_DIR_MODE).map_err(|source| LoggingError::Io {
            path: dir.clone(),
            source,
        })?;

        let path = task_log_path(base_dir, task)?;
        let io_error = |source| LoggingError::Io {
            path: path.clone(),
            source,
        };
        if create_file_with_mode(&path, LOG_FILE_MODE).map_err(io_error)? {
            tracing::debug!(path = %path.display(), "created task log file");
        }
        let file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(io_error)?;

        let file = SharedLogFile::new(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file.clone())
            .event_format(settings.template.clone());
        let subscriber = tracing_subscriber::registry()
            .with(settings.level)
            .with(layer);

        Ok(Self {
            task: task.clone(),
            path,
            dispatch: Dispatch::new(subscriber),
            file,
        })
    }

    pub fn task(&self) -> &TaskExecutionRef {
        &self.task
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn logger(&self) -> TaskLogger {
        TaskLogger::new(self.task.clone(), self.path.clone(), self.dispatch.clone())
    }

    /// Sync the file to storage and release the binding.
    ///
    /// Handles cloned from [`LocalLogSink::logger`] stay valid but record
    /// nothing afterwards.
    pub fn detach(self) -> Result<PathBuf, LoggingError> {
        let Self {
            path,
            dispatch,
            file,
            ..
        } = self;
        drop(dispatch);
        match file.close() {
            Ok(()) => Ok(path),
            Err(source) => Err(LoggingError::Sync { path, source }),
        }
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
