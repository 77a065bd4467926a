// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deployment configuration.
//!
//! Configuration is stored in `.projboard/config.toml` and includes:
//! - `[report]`: rounding precision, raw-client fallback, completion statuses
//!   and the default client color
//! - `[clients."Name"]`: color and owned issue-tracker projects per client
//! - `[time_tracking]`: time-tracking label -> issue-tracker project
//!
//! When no configuration file is found the built-in table is used.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use pb_core::status::DEFAULT_COMPLETION_STATUSES;
use pb_core::taxonomy::DEFAULT_COLOR;
use pb_core::{CompletionStatuses, ReportOptions, Taxonomy, TaxonomyConfig, UnmappedPolicy};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = ".projboard";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration stored in `.projboard/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(flatten)]
    pub taxonomy: TaxonomyConfig,
}

/// The `[report]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Decimal places for aggregated hour totals (1 or 2).
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Group unmapped time entries under their raw client name.
    #[serde(default = "default_true")]
    pub client_fallback: bool,
    /// Status names that mark an issue complete (case-insensitive).
    #[serde(default = "default_completion_statuses")]
    pub completion_statuses: Vec<String>,
    /// Color for clients without their own.
    #[serde(default = "default_color")]
    pub default_color: String,
}

fn default_precision() -> u32 {
    2
}

fn default_true() -> bool {
    true
}

fn default_completion_statuses() -> Vec<String> {
    DEFAULT_COMPLETION_STATUSES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            precision: default_precision(),
            client_fallback: default_true(),
            completion_statuses: default_completion_statuses(),
            default_color: default_color(),
        }
    }
}

impl Config {
    /// Configuration seeded with the built-in taxonomy.
    pub fn builtin() -> Self {
        Config {
            report: ReportConfig::default(),
            taxonomy: TaxonomyConfig::builtin(),
        }
    }

    /// Loads configuration from the given `.projboard/` directory.
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::load_file(&config_dir.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from an explicit file path.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.projboard/` directory.
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Builds the taxonomy lookup, validating the mapping.
    pub fn taxonomy(&self) -> Result<Taxonomy> {
        let taxonomy = Taxonomy::from_config(&self.taxonomy)?;
        Ok(taxonomy.with_default_color(self.report.default_color.clone()))
    }

    pub fn completion_statuses(&self) -> CompletionStatuses {
        CompletionStatuses::new(&self.report.completion_statuses)
    }

    /// Report options, with command-line overrides applied.
    pub fn report_options(
        &self,
        precision: Option<u32>,
        no_client_fallback: bool,
    ) -> Result<ReportOptions> {
        let unmapped = if no_client_fallback || !self.report.client_fallback {
            UnmappedPolicy::Drop
        } else {
            UnmappedPolicy::RawClient
        };
        let precision = precision.unwrap_or(self.report.precision);
        Ok(ReportOptions::new(precision, unmapped)?)
    }
}

/// Find the `.projboard` directory by walking up from `start`.
pub fn find_config_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config_dir = current.join(CONFIG_DIR_NAME);
        if config_dir.join(CONFIG_FILE_NAME).is_file() {
            return Some(config_dir);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist. Otherwise the nearest `.projboard/` above
/// `start` is used, falling back to [`Config::builtin`].
pub fn resolve(explicit: Option<&Path>, start: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        tracing::debug!(path = %path.display(), "loading config");
        return Config::load_file(path);
    }
    match find_config_dir(start) {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "loading config");
            Config::load(&dir)
        }
        None => {
            tracing::debug!("no config found, using built-in taxonomy");
            Ok(Config::builtin())
        }
    }
}

/// Initialize a `.projboard` directory with the built-in configuration.
pub fn init_config_dir(path: &Path, force: bool) -> Result<PathBuf> {
    let config_dir = path.join(CONFIG_DIR_NAME);

    if config_dir.join(CONFIG_FILE_NAME).exists() && !force {
        return Err(Error::AlreadyInitialized(config_dir.display().to_string()));
    }

    fs::create_dir_all(&config_dir)?;
    Config::builtin().save(&config_dir)?;

    Ok(config_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
