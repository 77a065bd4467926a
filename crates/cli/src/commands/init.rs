// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::config::init_config_dir;
use crate::error::Result;

pub fn run(target_path: &Path, force: bool) -> Result<()> {
    let config_dir = init_config_dir(target_path, force)?;
    println!("Initialized projboard config at {}", config_dir.display());
    println!("Edit config.toml to map your clients, projects and time-tracking labels.");
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
