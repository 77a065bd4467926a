// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! The filter comes from `PROJBOARD_LOG`, then `RUST_LOG`, then the
//! verbosity flag (`warn`, or `debug` with `--verbose`). `--verbose` always
//! wins over the environment.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Default directive when nothing else is configured.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    let fallback = default_directive(verbose);
    if verbose {
        return EnvFilter::new(fallback);
    }
    match env::log_filter() {
        Some(directive) => {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(fallback))
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn setup_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
