// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn projboard() -> Command {
    let mut cmd = cargo_bin_cmd!("projboard");
    cmd.env_remove("PROJBOARD_CONFIG")
        .env_remove("PROJBOARD_LOG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

pub const ISSUES: &str = r#"[
  {"key": "TES-1", "summary": "Design", "status": "In Progress", "assignee": "Ana",
   "project": "TRANSENER TESLA", "timeoriginalestimate": 36000, "timespent": 18000,
   "duedate": "2024-03-20"},
  {"key": "TES-2", "summary": "Rollout", "status": "Done", "assignee": "Luis",
   "project": "TRANSENER TESLA", "timeoriginalestimate": 7200, "timespent": 3600,
   "duedate": "2024-03-01", "resolutiondate": "2024-03-03"},
  {"key": "BAY-9", "summary": "Solped", "status": "Open", "project": "Bayer"},
  {"key": "X-1", "summary": "Elsewhere", "status": "Open", "project": "Unknown project"}
]"#;

pub const ENTRIES: &str = r#"{"projectName": "Tesla", "clientName": "Transener", "userName": "Ana", "taskName": "Dev", "duration": "PT2H"}
{"projectName": "Mejoras Solped", "clientName": "Bayer", "userName": "Luis", "duration": "PT45M"}
{"projectName": "Random", "clientName": "Other Co", "userName": "Bob", "duration": "PT1H30M"}
"#;

/// Temp directory holding `issues.json` and `entries.jsonl`.
pub fn fixture_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("issues.json"), ISSUES).unwrap();
    std::fs::write(temp.path().join("entries.jsonl"), ENTRIES).unwrap();
    temp
}

/// Read and parse a JSON file from the temp directory.
pub fn read_json(temp: &TempDir, name: &str) -> serde_json::Value {
    let content = std::fs::read_to_string(temp.path().join(name)).unwrap();
    serde_json::from_str(&content).unwrap()
}
