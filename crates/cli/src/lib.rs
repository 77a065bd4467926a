// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pbrs - library behind the `projboard` CLI.
//!
//! Reads issue-tracker and time-tracking exports, runs them through the
//! [`pb_core`] pipeline and writes the dashboard dataset.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`Config`] - deployment configuration (`.projboard/config.toml`)
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! let cli = pbrs::Cli::parse_from(["projboard", "build", "-i", "issues.json"]);
//! pbrs::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod env;
pub mod help;
pub mod logging;

pub mod config;
pub mod error;

pub use cli::{BuildArgs, BuildFormat, Cli, Command, OutputFormat};
pub use config::{find_config_dir, init_config_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;
use std::path::PathBuf;

/// Execute a CLI invocation. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let base_dir = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config_path: Option<PathBuf> = cli
        .config
        .or_else(env::config_path)
        .map(|p| base_dir.join(p));

    match cli.command {
        Command::Init { force } => commands::init::run(&base_dir, force),
        Command::Build(args) => {
            let config = config::resolve(config_path.as_deref(), &base_dir)?;
            commands::build::run(&base_dir, &config, &args)
        }
        Command::Taxonomy { output, query } => {
            let config = config::resolve(config_path.as_deref(), &base_dir)?;
            commands::taxonomy::run(&config, output, query)
        }
        Command::Schema => commands::schema::run(),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "projboard", &mut std::io::stdout());
            Ok(())
        }
    }
}
