// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_error_already_initialized_display() {
    let err = Error::AlreadyInitialized("/path/to/.projboard".to_string());
    let msg = err.to_string();
    assert!(msg.contains("already initialized"));
    assert!(msg.contains("/path/to/.projboard"));
    assert!(msg.contains("--force"));
}

#[test]
fn test_error_invalid_date_display() {
    let err = Error::InvalidDate("15/03/2024".to_string());
    let msg = err.to_string();
    assert!(msg.contains("15/03/2024"));
    assert!(msg.contains("YYYY-MM-DD"));
}

#[test]
fn test_error_input_display_names_path() {
    let err = Error::Input {
        path: "issues.json".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    assert!(err.to_string().contains("cannot read issues.json"));
}

#[test]
fn test_from_core_conflicting_mapping() {
    let core = pb_core::Error::ConflictingMapping {
        project: "Bayer".to_string(),
        first: "Bayer".to_string(),
        second: "SACDE".to_string(),
    };
    let err: Error = core.into();
    assert!(matches!(err, Error::ConflictingMapping { .. }));
    assert!(err.to_string().contains("exactly one client"));
}

#[test]
fn test_from_core_invalid_precision() {
    let err: Error = pb_core::Error::InvalidPrecision(5).into();
    assert!(matches!(err, Error::InvalidPrecision(5)));
}

#[test]
fn test_from_core_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = pb_core::Error::Json(json_err).into();
    assert!(err.to_string().starts_with("json error"));
}
