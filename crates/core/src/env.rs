// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the core crate.

/// Prefix for configuration overrides: `TASKLOG__<SECTION>__<KEY>`.
const OVERRIDE_PREFIX: &str = "TASKLOG";

/// Name of the environment variable overriding `[section] key`.
pub fn override_var_name(section: &str, key: &str) -> String {
    format!(
        "{}__{}__{}",
        OVERRIDE_PREFIX,
        section.to_ascii_uppercase(),
        key.to_ascii_uppercase()
    )
}

/// Read the override for `[section] key` from the process environment.
pub fn config_override(section: &str, key: &str) -> Option<String> {
    std::env::var(override_var_name(section, key)).ok()
}

/// Path to the config file: TASKLOG_CONFIG
pub fn config_path() -> Option<String> {
    std::env::var("TASKLOG_CONFIG").ok().filter(|s| !s.is_empty())
}
