// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument structs for the `build` command.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Dataset output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BuildFormat {
    /// Plain JSON document
    #[default]
    Json,
    /// JavaScript file assigning the document to `window.DASHBOARD_DATA`
    Js,
}

impl BuildFormat {
    /// Default output file name for this format.
    pub fn default_file_name(self) -> &'static str {
        match self {
            BuildFormat::Json => "dashboard.json",
            BuildFormat::Js => "dashboard.js",
        }
    }
}

/// Inputs and overrides for a dataset build.
#[derive(Args, Clone, Debug)]
pub struct BuildArgs {
    /// Issue-tracker records: JSON array, JSON Lines, API pages, or a `.csv` export
    #[arg(long, short = 'i', value_name = "path")]
    pub issues: PathBuf,

    /// Time-tracking entries: JSON array, JSON Lines, API pages, or a `.csv` export
    #[arg(long, short = 'e', value_name = "path")]
    pub entries: Option<PathBuf>,

    /// Output file, or `-` for stdout [default: dashboard.json / dashboard.js]
    #[arg(long, short = 'o', value_name = "path")]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    pub format: BuildFormat,

    /// Reference date for schedule status [default: local today]
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    /// Decimal places for hour totals (1 or 2), overrides config
    #[arg(long, value_name = "N")]
    pub precision: Option<u32>,

    /// Drop time entries with no taxonomy mapping instead of grouping them
    /// under their raw client name
    #[arg(long)]
    pub no_client_fallback: bool,
}
