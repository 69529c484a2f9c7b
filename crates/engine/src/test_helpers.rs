// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for the engine crate.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tasklog_adapters::{BackendRegistry, FakeRemoteBackend, FakeWorkerLogFetcher};
use tasklog_core::test_support::config_with;
use tasklog_core::LogConfig;
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

use crate::DefaultTaskLogging;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run an async test body with operator-facing tracing output captured
pub(crate) fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

/// Temp log folder, config, and fake backends registered for `s3` and `gs`.
pub(crate) struct TestContext {
    pub dir: TempDir,
    pub config: LogConfig,
    pub s3: FakeRemoteBackend,
    pub gcs: FakeRemoteBackend,
    pub fetcher: FakeWorkerLogFetcher,
}

impl TestContext {
    pub fn new(remote_base: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();
        let mut config = config_with(dir.path(), remote_base);
        config.core.log_format = "{level} {message}".to_string();
        Self {
            dir,
            config,
            s3: FakeRemoteBackend::new("s3"),
            gcs: FakeRemoteBackend::new("gcs"),
            fetcher: FakeWorkerLogFetcher::new(),
        }
    }

    pub fn base(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn registry(&self) -> BackendRegistry {
        let mut registry = BackendRegistry::new();
        registry.register("s3", Arc::new(self.s3.clone()));
        registry.register("gs", Arc::new(self.gcs.clone()));
        registry
    }

    pub fn logging(&self) -> DefaultTaskLogging {
        DefaultTaskLogging::with_adapters(
            self.config.clone(),
            self.registry(),
            Arc::new(self.fetcher.clone()),
        )
    }

    /// Backends that received any call
    pub fn backends_called(&self) -> Vec<&'static str> {
        let mut called = Vec::new();
        if !self.s3.calls().is_empty() {
            called.push("s3");
        }
        if !self.gcs.calls().is_empty() {
            called.push("gcs");
        }
        called
    }
}
