// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging configuration.
//!
//! Loaded from a TOML file with `[core]` and `[webserver]` tables, then
//! overridden per key by `TASKLOG__<SECTION>__<KEY>` environment variables.
//! Keys accept both `snake_case` and the historical upper-case spelling.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::log_paths::expand_home;

pub const DEFAULT_BASE_LOG_FOLDER: &str = "~/tasklog/logs";
pub const DEFAULT_LOGGING_LEVEL: &str = "INFO";
pub const DEFAULT_LOG_FORMAT: &str = "[{timestamp}] {{{target}}} {level} - {message}";
pub const DEFAULT_WORKER_LOG_SERVER_PORT: u16 = 8793;

/// Errors from loading or interpreting configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for [{section}] {key}: {value:?}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
    #[error("unknown logging level: {0}")]
    UnknownLevel(String),
}

/// A named configuration entry, possibly superseded by a newer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigKey {
    pub section: &'static str,
    pub name: &'static str,
    /// Set when this key is a deprecated alias of another key.
    pub replaced_by: Option<&'static str>,
}

pub const REMOTE_BASE_LOG_FOLDER: ConfigKey = ConfigKey {
    section: "core",
    name: "remote_base_log_folder",
    replaced_by: None,
};

// Deprecated since March 2016.
pub const S3_LOG_FOLDER: ConfigKey = ConfigKey {
    section: "core",
    name: "s3_log_folder",
    replaced_by: Some("remote_base_log_folder"),
};

/// Resolution order for the remote log base, first match wins.
pub const REMOTE_BASE_CHAIN: &[ConfigKey] = &[REMOTE_BASE_LOG_FOLDER, S3_LOG_FOLDER];

/// Keys that may be overridden from the environment.
const OVERRIDABLE_KEYS: &[(&str, &str)] = &[
    ("core", "base_log_folder"),
    ("core", "logging_level"),
    ("core", "log_format"),
    ("core", "remote_base_log_folder"),
    ("core", "s3_log_folder"),
    ("core", "encrypt_s3_logs"),
    ("webserver", "worker_log_server_port"),
    ("webserver", "log_fetch_timeout_sec"),
];

/// A value found by walking a key chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub value: &'a str,
    pub key: ConfigKey,
}

impl Resolved<'_> {
    pub fn is_deprecated(&self) -> bool {
        self.key.replaced_by.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    #[serde(alias = "BASE_LOG_FOLDER")]
    pub base_log_folder: String,
    #[serde(alias = "LOGGING_LEVEL")]
    pub logging_level: String,
    #[serde(alias = "LOG_FORMAT")]
    pub log_format: String,
    #[serde(alias = "REMOTE_BASE_LOG_FOLDER")]
    pub remote_base_log_folder: Option<String>,
    #[serde(alias = "S3_LOG_FOLDER")]
    pub s3_log_folder: Option<String>,
    /// Request server-side encryption for S3 uploads.
    #[serde(alias = "ENCRYPT_S3_LOGS")]
    pub encrypt_s3_logs: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            base_log_folder: DEFAULT_BASE_LOG_FOLDER.to_string(),
            logging_level: DEFAULT_LOGGING_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            remote_base_log_folder: None,
            s3_log_folder: None,
            encrypt_s3_logs: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebserverConfig {
    #[serde(alias = "WORKER_LOG_SERVER_PORT")]
    pub worker_log_server_port: u16,
    /// No timeout when unset.
    #[serde(alias = "LOG_FETCH_TIMEOUT_SEC")]
    pub log_fetch_timeout_sec: Option<u64>,
}

impl Default for WebserverConfig {
    fn default() -> Self {
        Self {
            worker_log_server_port: DEFAULT_WORKER_LOG_SERVER_PORT,
            log_fetch_timeout_sec: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub core: CoreConfig,
    pub webserver: WebserverConfig,
}

impl LogConfig {
    /// Load from `path` (or defaults when `None`) and apply environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(crate::env::config_override)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply per-key overrides. `lookup` receives `(section, key)`.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str, &str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        for (section, key) in OVERRIDABLE_KEYS {
            if let Some(value) = lookup(section, key) {
                self.set(section, key, value)?;
            }
        }
        Ok(())
    }

    fn set(&mut self, section: &str, key: &str, value: String) -> Result<(), ConfigError> {
        let invalid = |value: &str| ConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        };
        match (section, key) {
            ("core", "base_log_folder") => self.core.base_log_folder = value,
            ("core", "logging_level") => self.core.logging_level = value,
            ("core", "log_format") => self.core.log_format = value,
            ("core", "remote_base_log_folder") => self.core.remote_base_log_folder = Some(value),
            ("core", "s3_log_folder") => self.core.s3_log_folder = Some(value),
            ("core", "encrypt_s3_logs") => {
                self.core.encrypt_s3_logs = parse_bool(&value).ok_or_else(|| invalid(&value))?
            }
            ("webserver", "worker_log_server_port") => {
                self.webserver.worker_log_server_port =
                    value.trim().parse().map_err(|_| invalid(&value))?
            }
            ("webserver", "log_fetch_timeout_sec") => {
                self.webserver.log_fetch_timeout_sec =
                    Some(value.trim().parse().map_err(|_| invalid(&value))?)
            }
            _ => return Err(invalid(&value)),
        }
        Ok(())
    }

    /// Raw value of a chain key, if present.
    pub fn lookup(&self, key: &ConfigKey) -> Option<&str> {
        match (key.section, key.name) {
            ("core", "remote_base_log_folder") => self.core.remote_base_log_folder.as_deref(),
            ("core", "s3_log_folder") => self.core.s3_log_folder.as_deref(),
            _ => None,
        }
    }

    /// First non-empty value along `chain`.
    pub fn resolve(&self, chain: &[ConfigKey]) -> Option<Resolved<'_>> {
        chain.iter().find_map(|key| {
            self.lookup(key)
                .filter(|value| !value.is_empty())
                .map(|value| Resolved { value, key: *key })
        })
    }

    /// Resolve the remote log base, warning when a deprecated key supplied it.
    pub fn remote_base(&self) -> Option<Resolved<'_>> {
        let resolved = self.resolve(REMOTE_BASE_CHAIN)?;
        if let Some(replacement) = resolved.key.replaced_by {
            tracing::warn!(
                deprecated = resolved.key.name,
                replacement,
                "the {} conf key has been replaced by {}; your conf still works but please \
                 update it to ensure future compatibility",
                resolved.key.name,
                replacement
            );
        }
        Some(resolved)
    }

    /// Local base folder with `~` expanded.
    pub fn base_log_folder(&self) -> PathBuf {
        expand_home(&self.core.base_log_folder)
    }

    pub fn logging_level(&self) -> Result<LevelFilter, ConfigError> {
        parse_level(&self.core.logging_level)
    }

    pub fn log_fetch_timeout(&self) -> Option<Duration> {
        self.webserver.log_fetch_timeout_sec.map(Duration::from_secs)
    }
}

/// Parse a severity name. Accepts `WARNING` and `CRITICAL`/`FATAL` spellings.
pub fn parse_level(name: &str) -> Result<LevelFilter, ConfigError> {
    match name.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Ok(LevelFilter::TRACE),
        "DEBUG" => Ok(LevelFilter::DEBUG),
        "INFO" => Ok(LevelFilter::INFO),
        "WARN" | "WARNING" => Ok(LevelFilter::WARN),
        "ERROR" | "CRITICAL" | "FATAL" => Ok(LevelFilter::ERROR),
        "NOTSET" => Ok(LevelFilter::TRACE),
        "OFF" => Ok(LevelFilter::OFF),
        _ => Err(ConfigError::UnknownLevel(name.to_string())),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
