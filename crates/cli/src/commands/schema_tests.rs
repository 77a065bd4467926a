// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use pb_core::Dashboard;

#[test]
fn schema_dashboard_produces_valid_json() {
    let schema = schemars::schema_for!(Dashboard);
    let json = serde_json::to_string_pretty(&schema).unwrap();

    assert!(json.contains("\"$schema\""));
    assert!(json.contains("\"Dashboard\""));
    assert!(json.contains("\"clients\""));
    assert!(json.contains("\"generated_at\""));
}

#[test]
fn schema_dashboard_includes_nested_types() {
    let schema = schemars::schema_for!(Dashboard);
    let json = serde_json::to_string(&schema).unwrap();

    assert!(json.contains("\"ClientReport\""));
    assert!(json.contains("\"ProjectReport\""));
    assert!(json.contains("\"Task\""));
    assert!(json.contains("\"Light\""));
}

#[test]
fn schema_light_lists_all_colors() {
    let schema = schemars::schema_for!(Dashboard);
    let json = serde_json::to_string(&schema).unwrap();

    for light in ["green", "yellow", "red", "gray"] {
        assert!(json.contains(&format!("\"{light}\"")), "missing {light}");
    }
}
