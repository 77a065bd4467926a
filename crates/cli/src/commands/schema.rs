// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs the JSON Schema of the dataset written by `build`.

use crate::error::Result;
use pb_core::Dashboard;
use schemars::schema_for;

/// Run the schema command.
pub fn run() -> Result<()> {
    let schema = schema_for!(Dashboard);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
