// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field normalization for raw source records.
//!
//! Every function here is total: malformed input yields `None` (or `0.0` for
//! duration tokens) instead of an error.
//!
//! Two absence semantics coexist and must not be merged:
//! - seconds counters ([`seconds_to_hours`]) return `None` for empty or zero
//!   input, meaning "unknown";
//! - duration tokens ([`parse_iso_duration`]) return `0.0` for anything that
//!   is not a `PT...` token, meaning "measured zero".
//!
//! Sums of hours are kept as whole milliseconds ([`hours_to_millis`],
//! [`millis_to_hours`]) so that totals are exact and order-independent.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Month abbreviations used by the issue tracker's export locale.
const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Decimal places applied to hours entering a task.
pub const TASK_PRECISION: u32 = 2;

pub const MILLIS_PER_HOUR: i64 = 3_600_000;

static DURATION_PART_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(\d+(?:\.\d+)?)([HMS])") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Rounds to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Parses a date in either accepted encoding.
///
/// Text containing `/` is read as a locale date, anything else as ISO-8601.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else if s.contains('/') {
        parse_locale_date(s)
    } else {
        parse_iso_date(s)
    }
}

/// Parses `day/mon/year[ time]`, e.g. `15/ene/26 10:30 AM` or `3/Dic./2025`.
///
/// Years below 100 are read as 2000 + year. The time part is ignored.
pub fn parse_locale_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.split_whitespace().next()?;
    let mut parts = date_part.split('/');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let day: u32 = day.parse().ok()?;
    let month = month_number(month)?;
    let year: u32 = year.parse().ok()?;
    let year = if year < 100 { 2000 + year } else { year };

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// Resolves a month abbreviation (case-insensitive, periods ignored).
fn month_number(token: &str) -> Option<u32> {
    let token = token.replace('.', "").to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == token)
        .map(|index| index as u32 + 1)
}

/// Parses an ISO-8601 date or date-time, keeping the date only.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

/// Converts an elapsed-seconds string to hours (2 decimals).
///
/// Empty, zero and non-integer input is unknown and yields `None`.
pub fn seconds_to_hours(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<i64>().ok().and_then(hours_from_seconds)
}

/// Numeric form of [`seconds_to_hours`].
pub fn hours_from_seconds(seconds: i64) -> Option<f64> {
    if seconds == 0 {
        return None;
    }
    Some(round_to(seconds as f64 / 3600.0, TASK_PRECISION))
}

/// Whole milliseconds in `hours`. Non-finite input is zero.
pub fn hours_to_millis(hours: f64) -> i64 {
    if hours.is_finite() {
        (hours * MILLIS_PER_HOUR as f64).round() as i64
    } else {
        0
    }
}

pub fn millis_to_hours(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_HOUR as f64
}

/// Parses an ISO-8601 time duration (`PT1H30M15S`) into fractional hours.
///
/// Missing components count as zero. Input without the `PT` prefix is a
/// measured zero, not an unknown: it yields `0.0`.
pub fn parse_iso_duration(s: &str) -> f64 {
    millis_to_hours(parse_iso_duration_millis(s))
}

/// Millisecond form of [`parse_iso_duration`].
pub fn parse_iso_duration_millis(s: &str) -> i64 {
    let Some(rest) = s.trim().strip_prefix("PT") else {
        return 0;
    };

    DURATION_PART_RE
        .captures_iter(rest)
        .map(|caps| {
            let amount: f64 = caps[1].parse().unwrap_or(0.0);
            let unit = match &caps[2] {
                "H" => MILLIS_PER_HOUR,
                "M" => 60_000,
                _ => 1_000,
            };
            (amount * unit as f64).round() as i64
        })
        .sum()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
