// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: remote log stores and worker log servers

mod env;
pub mod remote;
pub mod subprocess;
pub mod traced;
pub mod worker;

pub use remote::{
    BackendRegistry, GcsCliBackend, RemoteLogBackend, RemoteReadError, RemoteWriteError, Route,
    S3CliBackend,
};
pub use traced::{TracedBackend, TracedFetcher};
pub use worker::{HttpWorkerLogFetcher, WorkerFetchError, WorkerLogFetcher};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use remote::{FakeRemoteBackend, RemoteCall};
#[cfg(any(test, feature = "test-support"))]
pub use worker::FakeWorkerLogFetcher;
