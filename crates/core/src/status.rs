// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Traffic-light statuses and the completion-status set.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Health summary for a task's schedule or effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Light {
    /// On track.
    Green,
    /// At risk.
    Yellow,
    /// Late or over budget.
    Red,
    /// Not enough data to judge.
    Gray,
}

impl Light {
    /// Returns the string representation used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Light::Green => "green",
            Light::Yellow => "yellow",
            Light::Red => "red",
            Light::Gray => "gray",
        }
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status names treated as complete in the issue tracker.
pub const DEFAULT_COMPLETION_STATUSES: &[&str] = &[
    "finalizada",
    "cerrado",
    "resuelto",
    "done",
    "closed",
    "resolved",
    "completado",
    "completada",
    "terminado",
    "terminada",
    "entrega",
];

/// Closed set of status names that mark an issue as complete.
///
/// Membership is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionStatuses {
    names: HashSet<String>,
}

impl CompletionStatuses {
    /// Builds the set from arbitrary status names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CompletionStatuses {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// Returns true if the status name marks completion.
    pub fn is_complete(&self, status: &str) -> bool {
        self.names.contains(&status.trim().to_lowercase())
    }

    /// Number of names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the set is empty (nothing ever completes).
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CompletionStatuses {
    fn default() -> Self {
        Self::new(DEFAULT_COMPLETION_STATUSES)
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
