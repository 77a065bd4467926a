// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the pbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("already initialized at {0}\n  hint: pass --force to overwrite the existing config")]
    AlreadyInitialized(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid date '{0}'\n  hint: use YYYY-MM-DD")]
    InvalidDate(String),

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

    #[error("cannot read {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(String),
}

impl From<pb_core::Error> for Error {
    fn from(e: pb_core::Error) -> Self {
        match e {
            pb_core::Error::MissingField { field } => Error::MissingField { field },
            pb_core::Error::ConflictingMapping {
                project,
                first,
                second,
            } => Error::ConflictingMapping {
                project,
                first,
                second,
            },
            pb_core::Error::InvalidPrecision(p) => Error::InvalidPrecision(p),
            pb_core::Error::Io(e) => Error::Io(e),
            pb_core::Error::Json(e) => Error::Json(e),
            pb_core::Error::Csv(e) => Error::Csv(e.to_string()),
        }
    }
}

/// A specialized Result type for pbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
