// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

pub use args::{BuildArgs, BuildFormat};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "projboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Reconcile issue-tracker exports and time-tracking entries into a client dashboard"
)]
#[command(
    long_about = "Reconcile issue-tracker exports and time-tracking entries into a client dashboard.\n\n\
    Issues and time entries are grouped by client and project, classified with schedule \
    and effort status lights, and written as a single JSON dataset."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Run as if projboard was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Config file to use instead of searching for .projboard/config.toml
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Reporting
    // ─────────────────────────────────────────────────────────────────────────
    /// Build the dashboard dataset from issue and time-entry exports
    #[command(after_help = colors::examples("\
Examples:
  projboard build -i issues.json                      Issues only
  projboard build -i issues.json -e entries.jsonl     Issues and tracked time
  projboard build -i jira.csv -e clockify.csv         Read the trackers' CSV exports
  projboard build -i issues.json -f js -o data.js     Write a script for the dashboard page
  projboard build -i issues.json -o -                 Print the dataset to stdout
  projboard build -i issues.json --today 2024-03-15   Classify as of a fixed date"))]
    Build(BuildArgs),

    /// Show the client/project mapping in effect
    #[command(after_help = colors::examples("\
Examples:
  projboard taxonomy            Show clients, projects and time labels
  projboard taxonomy -o json    Output the mapping as JSON
  projboard taxonomy --query    Print the issue-tracker export query"))]
    Taxonomy {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,

        /// Print only the issue-tracker query selecting every mapped project
        #[arg(long, conflicts_with = "output")]
        query: bool,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Write .projboard/config.toml seeded with the built-in taxonomy
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Output JSON Schema for the dataset written by 'build'
    Schema,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
