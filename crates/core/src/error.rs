// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pb-core operations.
//!
//! Data-quality problems (unparseable dates, unmapped projects, missing
//! estimates) are never errors here; they resolve to `None`, `0.0` or a gray
//! status. These variants cover structural problems only.

use thiserror::Error;

/// All possible errors that can occur in pb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("record is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("project '{project}' is mapped to both '{first}' and '{second}'\n  hint: an issue-tracker project belongs to exactly one client")]
    ConflictingMapping {
        project: String,
        first: String,
        second: String,
    },

    #[error("invalid precision: {0}\n  hint: hour totals are rounded to 1 or 2 decimals")]
    InvalidPrecision(u32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// A specialized Result type for pb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
