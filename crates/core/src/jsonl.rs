// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record file reading.
//!
//! Input files hold a JSON array of records, JSON Lines (one record per
//! line), or API result pages: objects whose `issues` or `timeentries` array
//! holds the records. A page may fill the whole file or one line of a JSON
//! Lines file. Records that fail to deserialize are reported individually
//! and never prevent the rest of the file from loading.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// A record that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based position: the line number for JSON Lines, the element index
    /// for arrays.
    pub line: usize,
    pub reason: String,
}

/// Decoded records plus the ones that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Records<T> {
    pub records: Vec<T>,
    pub errors: Vec<LineError>,
}

/// Reads every record from a file.
///
/// # Errors
///
/// Fails on I/O errors, or if a JSON array file is not valid JSON as a
/// whole. Individual bad records land in [`Records::errors`].
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Records<T>> {
    let content = fs::read_to_string(path)?;
    parse_records(&content)
}

/// Keys under which API result pages carry their records.
const PAGE_KEYS: [&str; 2] = ["issues", "timeentries"];

/// Parses records from a string; see [`read_records`].
pub fn parse_records<T: DeserializeOwned>(content: &str) -> Result<Records<T>> {
    let mut parsed = Records {
        records: Vec::new(),
        errors: Vec::new(),
    };

    let trimmed = content.trim_start();
    if trimmed.starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(content)?;
        for (index, value) in values.into_iter().enumerate() {
            parsed.push(index + 1, value);
        }
    } else if let Some(values) = whole_page(content) {
        for (index, value) in values.into_iter().enumerate() {
            parsed.push(index + 1, value);
        }
    } else {
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut value: Value = match serde_json::from_str(line) {
                Ok(value) => value,
                Err(e) => {
                    parsed.reject(index + 1, e);
                    continue;
                }
            };
            match take_page(&mut value) {
                Some(values) => {
                    for value in values {
                        parsed.push(index + 1, value);
                    }
                }
                None => parsed.push(index + 1, value),
            }
        }
    }

    Ok(parsed)
}

/// The records of a file holding a single, possibly pretty-printed, page.
fn whole_page(content: &str) -> Option<Vec<Value>> {
    if !content.trim_start().starts_with('{') {
        return None;
    }
    let mut value: Value = serde_json::from_str(content).ok()?;
    take_page(&mut value)
}

/// Takes the records out of an API result page. `None` leaves non-pages
/// untouched.
fn take_page(value: &mut Value) -> Option<Vec<Value>> {
    let page = value.as_object_mut()?;
    let key = PAGE_KEYS
        .iter()
        .find(|key| page.get(**key).is_some_and(Value::is_array))?;
    match page.remove(*key) {
        Some(Value::Array(items)) => Some(items),
        _ => None,
    }
}

impl<T: DeserializeOwned> Records<T> {
    fn push(&mut self, line: usize, value: Value) {
        match serde_json::from_value(value) {
            Ok(record) => self.records.push(record),
            Err(e) => self.reject(line, e),
        }
    }

    fn reject(&mut self, line: usize, reason: impl ToString) {
        self.errors.push(LineError {
            line,
            reason: reason.to_string(),
        });
    }
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
