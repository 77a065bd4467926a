// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn creates_config_dir() {
    let temp = TempDir::new().unwrap();

    projboard()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized projboard config"));

    let config = std::fs::read_to_string(temp.path().join(".projboard/config.toml")).unwrap();
    assert!(config.contains("[report]"));
    assert!(config.contains("Transener"));
}

#[test]
fn fails_if_already_initialized() {
    let temp = TempDir::new().unwrap();

    projboard()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();

    projboard()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn force_overwrites() {
    let temp = TempDir::new().unwrap();

    projboard().arg("init").current_dir(temp.path()).assert().success();
    projboard()
        .args(["init", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn directory_flag_targets_other_dir() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested");
    std::fs::create_dir_all(&target).unwrap();

    projboard()
        .arg("-C")
        .arg(&target)
        .arg("init")
        .assert()
        .success();

    assert!(target.join(".projboard/config.toml").exists());
}
