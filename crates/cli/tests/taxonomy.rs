// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn text_lists_builtin_clients() {
    let temp = TempDir::new().unwrap();
    projboard()
        .arg("taxonomy")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Transener (#6366f1)"))
        .stdout(predicate::str::contains("  TRANSENER TESLA"))
        .stdout(predicate::str::contains("    <- Tesla"));
}

#[test]
fn json_output_parses() {
    let temp = TempDir::new().unwrap();
    let output = projboard()
        .args(["taxonomy", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["clients"].as_array().unwrap().len(), 4);
}

#[test]
fn query_prints_issue_query() {
    let temp = TempDir::new().unwrap();
    projboard()
        .args(["taxonomy", "--query"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("project in (\""))
        .stdout(predicate::str::contains("ORDER BY created DESC"));
}

#[test]
fn uses_config_found_in_parent_dir() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".projboard");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[clients.\"Acme\"]\nprojects = [\"ACME Core\"]\n",
    )
    .unwrap();
    let nested = temp.path().join("sub");
    std::fs::create_dir_all(&nested).unwrap();

    projboard()
        .arg("taxonomy")
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme (#667eea)"))
        .stdout(predicate::str::contains("Transener").not());
}

#[test]
fn conflicting_config_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("bad.toml"),
        "[clients.\"A\"]\nprojects = [\"P\"]\n[clients.\"B\"]\nprojects = [\"P\"]\n",
    )
    .unwrap();

    projboard()
        .args(["taxonomy", "--config", "bad.toml"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("mapped to both"));
}
