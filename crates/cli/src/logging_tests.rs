// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    quiet = { false, "warn" },
    verbose = { true, "debug" },
)]
fn test_default_directive(verbose: bool, expected: &str) {
    assert_eq!(default_directive(verbose), expected);
}

#[test]
fn test_verbose_filter_enables_debug() {
    let filter = build_filter(true);
    assert_eq!(
        filter.max_level_hint(),
        Some(tracing_subscriber::filter::LevelFilter::DEBUG)
    );
}

#[test]
fn test_setup_logging_is_idempotent() {
    setup_logging(false);
    setup_logging(true);
}
