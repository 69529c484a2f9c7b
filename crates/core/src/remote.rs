// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of remote log destinations by URI scheme.

use std::fmt;

/// URI scheme served by the S3-like backend.
pub const S3_SCHEME: &str = "s3";
/// URI scheme served by the GCS-like backend.
pub const GCS_SCHEME: &str = "gs";

/// Remote store family a destination belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RemoteScheme {
    S3,
    Gcs,
    /// Any other scheme. Empty when the value is not a URI at all
    /// (e.g. a plain filesystem path).
    Other(String),
    /// Shipping is disabled.
    None,
}

impl RemoteScheme {
    /// Classify a configured remote value.
    ///
    /// Empty and the literal `None` disable shipping.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "None" {
            return RemoteScheme::None;
        }
        match url::Url::parse(value) {
            Ok(url) => match url.scheme() {
                S3_SCHEME => RemoteScheme::S3,
                GCS_SCHEME => RemoteScheme::Gcs,
                other => RemoteScheme::Other(other.to_string()),
            },
            Err(_) => RemoteScheme::Other(String::new()),
        }
    }

    /// Registry key for this scheme, if shipping is enabled.
    pub fn key(&self) -> Option<&str> {
        match self {
            RemoteScheme::S3 => Some(S3_SCHEME),
            RemoteScheme::Gcs => Some(GCS_SCHEME),
            RemoteScheme::Other(scheme) => Some(scheme),
            RemoteScheme::None => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, RemoteScheme::None)
    }
}

/// A concrete remote location for one task log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDestination {
    pub scheme: RemoteScheme,
    pub uri: String,
}

impl RemoteDestination {
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        Self {
            scheme: RemoteScheme::parse(&uri),
            uri,
        }
    }
}

impl fmt::Display for RemoteDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
