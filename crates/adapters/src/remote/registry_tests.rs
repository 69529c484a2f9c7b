// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::remote::FakeRemoteBackend;

fn registry_with_fakes() -> (BackendRegistry, FakeRemoteBackend, FakeRemoteBackend) {
    let s3 = FakeRemoteBackend::new("s3");
    let gcs = FakeRemoteBackend::new("gcs");
    let mut registry = BackendRegistry::new();
    registry.register("s3", Arc::new(s3.clone()));
    registry.register("gs", Arc::new(gcs.clone()));
    (registry, s3, gcs)
}

fn route_name(route: &Route) -> String {
    match route {
        Route::Disabled => "disabled".to_string(),
        Route::Unsupported => "unsupported".to_string(),
        Route::Backend(backend) => backend.name().to_string(),
    }
}

#[yare::parameterized(
    s3           = { "s3://bucket/logs/dag/task/2017-01-01T00:00:00", "s3" },
    s3_one_slash = { "s3:/bucket/logs", "s3" },
    gcs          = { "gs://bucket/logs", "gcs" },
    ftp          = { "ftp://host/path", "unsupported" },
    local_path   = { "/mnt/logs/dag/task", "unsupported" },
    none_literal = { "None", "disabled" },
    empty        = { "", "disabled" },
)]
fn routes_by_scheme(uri: &str, expected: &str) {
    let (registry, _, _) = registry_with_fakes();
    let route = registry.route(&RemoteDestination::new(uri));
    assert_eq!(route_name(&route), expected);
}

#[test]
fn register_replaces_existing_backend() {
    let (mut registry, _, _) = registry_with_fakes();
    let replacement = FakeRemoteBackend::new("s3-replacement");

    let previous = registry.register("S3", Arc::new(replacement));

    assert_eq!(previous.map(|b| b.name()), Some("s3"));
    let route = registry.route(&RemoteDestination::new("s3://bucket"));
    assert_eq!(route_name(&route), "s3-replacement");
}

#[test]
fn custom_scheme_can_be_registered() {
    let (mut registry, _, _) = registry_with_fakes();
    registry.register("az", Arc::new(FakeRemoteBackend::new("azure")));

    let route = registry.route(&RemoteDestination::new("az://container/logs"));
    assert_eq!(route_name(&route), "azure");
    assert_eq!(registry.schemes(), vec!["az", "gs", "s3"]);
}

#[test]
fn defaults_cover_s3_and_gcs() {
    let registry = BackendRegistry::with_defaults(&LogConfig::default());
    assert_eq!(registry.schemes(), vec!["gs", "s3"]);
    let route = registry.route(&RemoteDestination::new("gs://bucket"));
    assert_eq!(route_name(&route), "gcs");
}
