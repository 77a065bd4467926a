// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
    assert_eq!(vars::PROJBOARD_CONFIG, "PROJBOARD_CONFIG");
    assert_eq!(vars::PROJBOARD_LOG, "PROJBOARD_LOG");
}

#[test]
fn test_no_color_set_to_other() {
    std::env::set_var("NO_COLOR", "true");
    assert!(!no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn test_config_path_set() {
    std::env::set_var("PROJBOARD_CONFIG", "/tmp/board.toml");
    assert_eq!(config_path(), Some(PathBuf::from("/tmp/board.toml")));
    std::env::remove_var("PROJBOARD_CONFIG");
    assert_eq!(config_path(), None);
}

#[test]
fn test_config_path_blank_is_unset() {
    std::env::set_var("PROJBOARD_CONFIG", "  ");
    assert_eq!(config_path(), None);
    std::env::remove_var("PROJBOARD_CONFIG");
}

#[test]
fn test_log_filter() {
    std::env::set_var("PROJBOARD_LOG", "pb_core=debug");
    assert_eq!(log_filter().as_deref(), Some("pb_core=debug"));
    std::env::remove_var("PROJBOARD_LOG");
    assert_eq!(log_filter(), None);
}
