// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution timestamps and their ISO-8601 rendering.
//!
//! The rendered form is part of every log file name, so it must stay
//! stable: `YYYY-MM-DDTHH:MM:SS`, with `.ffffff` appended only when the
//! timestamp has a non-zero microsecond component, and no offset suffix.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Accepted input layouts. `%.f` also matches an absent fraction.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecutionDateError {
    #[error("invalid execution date '{0}': expected YYYY-MM-DDTHH:MM:SS")]
    Invalid(String),
}

/// Logical timestamp of one task run, truncated to microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExecutionDate(NaiveDateTime);

impl ExecutionDate {
    pub fn new(datetime: NaiveDateTime) -> Self {
        let micros = datetime.nanosecond() / 1_000;
        // with_nanosecond only fails for out-of-range input, which a
        // truncated value can never be.
        Self(datetime.with_nanosecond(micros * 1_000).unwrap_or(datetime))
    }

    /// Parse `YYYY-MM-DDTHH:MM:SS[.ffffff]`, the space-separated variant,
    /// or a bare `YYYY-MM-DD` (midnight).
    pub fn parse(input: &str) -> Result<Self, ExecutionDateError> {
        let trimmed = input.trim();
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self::new(datetime));
            }
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self::new)
            .ok_or_else(|| ExecutionDateError::Invalid(input.to_string()))
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Render as ISO-8601 without timezone, e.g. `2017-01-01T12:34:56`.
    pub fn to_iso(&self) -> String {
        if self.0.nanosecond() == 0 {
            self.0.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            self.0.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
        }
    }
}

impl From<NaiveDateTime> for ExecutionDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

impl FromStr for ExecutionDate {
    type Err = ExecutionDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ExecutionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl Serialize for ExecutionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for ExecutionDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "execution_date_tests.rs"]
mod tests;
