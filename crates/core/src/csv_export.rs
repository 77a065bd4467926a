// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading the trackers' CSV exports.
//!
//! Both exports are read by column position, the way the trackers lay them
//! out. The first row is a header and is skipped. Rows with too few columns
//! land in [`Records::errors`] and never stop the rest of the file.
//!
//! Issue export columns: summary (0), key (1), status (4), project (6),
//! assignee (13), resolved (22), due (23), original estimate (51),
//! remaining estimate (52), time spent (53). Estimates are seconds.
//!
//! Time export columns: project (0), client (1), task (3), user (5),
//! decimal duration in hours (15).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::Result;
use crate::jsonl::{LineError, Records};
use crate::record::{DurationField, RawIssue, RawTimeEntry, TimeField};

const ISSUE_SUMMARY: usize = 0;
const ISSUE_KEY: usize = 1;
const ISSUE_STATUS: usize = 4;
const ISSUE_PROJECT: usize = 6;
const ISSUE_ASSIGNEE: usize = 13;
const ISSUE_RESOLVED: usize = 22;
const ISSUE_DUE: usize = 23;
const ISSUE_ORIGINAL_ESTIMATE: usize = 51;
const ISSUE_REMAINING_ESTIMATE: usize = 52;
const ISSUE_TIME_SPENT: usize = 53;
/// Narrowest issue row that is read.
const ISSUE_COLUMNS: usize = 55;

const ENTRY_PROJECT: usize = 0;
const ENTRY_CLIENT: usize = 1;
const ENTRY_TASK: usize = 3;
const ENTRY_USER: usize = 5;
const ENTRY_DECIMAL_DURATION: usize = 15;
/// Narrowest time row that is read.
const ENTRY_COLUMNS: usize = 16;

/// Reads an issue-tracker CSV export.
///
/// # Errors
///
/// Fails if the file cannot be opened or read.
pub fn read_issue_csv(path: &Path) -> Result<Records<RawIssue>> {
    parse_issue_csv(File::open(path)?)
}

/// Reads a time-tracker CSV export.
///
/// # Errors
///
/// Fails if the file cannot be opened or read.
pub fn read_entry_csv(path: &Path) -> Result<Records<RawTimeEntry>> {
    parse_entry_csv(File::open(path)?)
}

pub fn parse_issue_csv<R: Read>(reader: R) -> Result<Records<RawIssue>> {
    parse_rows(reader, ISSUE_COLUMNS, issue_from_row)
}

pub fn parse_entry_csv<R: Read>(reader: R) -> Result<Records<RawTimeEntry>> {
    parse_rows(reader, ENTRY_COLUMNS, entry_from_row)
}

fn parse_rows<R: Read, T>(
    reader: R,
    columns: usize,
    decode: fn(&StringRecord) -> T,
) -> Result<Records<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut errors = Vec::new();
    for row in reader.records() {
        match row {
            Ok(row) if row.len() >= columns => records.push(decode(&row)),
            Ok(row) => errors.push(LineError {
                line: row.position().map_or(0, |p| p.line() as usize),
                reason: format!("expected at least {columns} columns, found {}", row.len()),
            }),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => errors.push(LineError {
                line: e.position().map_or(0, |p| p.line() as usize),
                reason: e.to_string(),
            }),
        }
    }

    Ok(Records { records, errors })
}

fn cell(row: &StringRecord, index: usize) -> String {
    row.get(index).unwrap_or("").trim().to_string()
}

fn optional_cell(row: &StringRecord, index: usize) -> Option<String> {
    Some(cell(row, index)).filter(|value| !value.is_empty())
}

fn issue_from_row(row: &StringRecord) -> RawIssue {
    let seconds = |index| optional_cell(row, index).map(TimeField::Text);
    RawIssue {
        key: cell(row, ISSUE_KEY),
        summary: cell(row, ISSUE_SUMMARY),
        status: cell(row, ISSUE_STATUS),
        assignee: optional_cell(row, ISSUE_ASSIGNEE),
        project: cell(row, ISSUE_PROJECT),
        original_estimate: seconds(ISSUE_ORIGINAL_ESTIMATE),
        remaining_estimate: seconds(ISSUE_REMAINING_ESTIMATE),
        time_spent: seconds(ISSUE_TIME_SPENT),
        due_date: optional_cell(row, ISSUE_DUE),
        resolution_date: optional_cell(row, ISSUE_RESOLVED),
        ..Default::default()
    }
}

/// An unreadable duration counts as zero hours.
fn entry_from_row(row: &StringRecord) -> RawTimeEntry {
    let hours = cell(row, ENTRY_DECIMAL_DURATION)
        .parse::<f64>()
        .unwrap_or(0.0);
    RawTimeEntry {
        project: cell(row, ENTRY_PROJECT),
        client: optional_cell(row, ENTRY_CLIENT),
        user: cell(row, ENTRY_USER),
        task: optional_cell(row, ENTRY_TASK),
        duration: DurationField::Hours { hours },
        time_interval: None,
    }
}

#[cfg(test)]
#[path = "csv_export_tests.rs"]
mod tests;
