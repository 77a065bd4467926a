// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw source records and their normalized forms.
//!
//! [`RawIssue`] and [`RawTimeEntry`] mirror what the ingestion side hands
//! over. Three shapes are accepted for each:
//! - the flat form (`project`, `duration`);
//! - the remote APIs' own records, stored verbatim: issues carry their
//!   values under `fields` (`fields.project.name`,
//!   `fields.assignee.displayName`), time entries carry their duration under
//!   `timeInterval.duration`;
//! - rows of the trackers' CSV exports, see [`crate::csv_export`].
//!
//! Numeric quantities are seconds unless wrapped as `{"hours": ..}`. A JSON
//! integer or float (`3600`, `1.5`) counts as elapsed seconds, fractions
//! included.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::normalize::{
    hours_from_seconds, hours_to_millis, millis_to_hours, parse_date, parse_iso_duration_millis,
    round_to, seconds_to_hours, TASK_PRECISION,
};

/// An hours quantity as reported by the issue tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeField {
    /// Elapsed seconds.
    Seconds(i64),
    /// Elapsed seconds with a fractional part.
    Number(f64),
    /// Elapsed seconds as text (CSV exports).
    Text(String),
    /// Already converted to hours.
    Hours { hours: f64 },
}

impl TimeField {
    /// Hours (2 decimals), or `None` when the value is empty, zero or
    /// malformed.
    pub fn hours(&self) -> Option<f64> {
        match self {
            TimeField::Seconds(seconds) => hours_from_seconds(*seconds),
            TimeField::Number(seconds) => known(*seconds / 3600.0),
            TimeField::Text(text) => seconds_to_hours(text),
            TimeField::Hours { hours } => known(*hours),
        }
    }
}

fn known(hours: f64) -> Option<f64> {
    if hours.is_finite() && hours != 0.0 {
        Some(round_to(hours, TASK_PRECISION))
    } else {
        None
    }
}

/// A logged duration as reported by the time tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationField {
    /// Elapsed seconds.
    Seconds(i64),
    /// Elapsed seconds with a fractional part.
    Number(f64),
    /// Elapsed seconds as text, or an ISO-8601 token such as `PT1H30M`.
    Text(String),
    /// Already converted to hours (decimal-duration exports).
    Hours { hours: f64 },
}

impl DurationField {
    /// Whole milliseconds, never negative. Malformed values count as zero.
    ///
    /// Unlike issue hours, durations are not rounded: they are summed, and
    /// only the sums are rounded.
    pub fn millis(&self) -> i64 {
        let millis = match self {
            DurationField::Seconds(seconds) => seconds.saturating_mul(1000),
            DurationField::Number(seconds) => hours_to_millis(*seconds / 3600.0),
            DurationField::Text(text) => {
                let text = text.trim();
                if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                    text.parse::<i64>()
                        .map(|seconds| seconds.saturating_mul(1000))
                        .unwrap_or(0)
                } else {
                    parse_iso_duration_millis(text)
                }
            }
            DurationField::Hours { hours } => hours_to_millis(*hours),
        };
        millis.max(0)
    }

    /// Hours, never negative.
    pub fn hours(&self) -> f64 {
        millis_to_hours(self.millis())
    }
}

impl Default for DurationField {
    fn default() -> Self {
        DurationField::Text("PT0S".to_string())
    }
}

/// One issue as handed over by the issue-tracker client.
///
/// Flat values win over the ones nested under `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIssue {
    /// Issue key, e.g. `TESLA-42`.
    #[serde(default)]
    pub key: String,
    /// Used as the key when `key` is blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub summary: String,
    /// Status name as displayed by the tracker.
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Issue-tracker project name.
    #[serde(default)]
    pub project: String,
    #[serde(default, alias = "timeoriginalestimate")]
    pub original_estimate: Option<TimeField>,
    #[serde(default, alias = "timeestimate")]
    pub remaining_estimate: Option<TimeField>,
    #[serde(default, alias = "timespent")]
    pub time_spent: Option<TimeField>,
    #[serde(default, alias = "duedate")]
    pub due_date: Option<String>,
    #[serde(default, alias = "resolutiondate")]
    pub resolution_date: Option<String>,
    /// The issue tracker's nested field block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<IssueFields>,
}

/// The `fields` object of an issue fetched from the issue tracker's API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Named>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Named>,
    #[serde(
        default,
        rename = "timeoriginalestimate",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_estimate: Option<TimeField>,
    #[serde(default, rename = "timeestimate", skip_serializing_if = "Option::is_none")]
    pub remaining_estimate: Option<TimeField>,
    #[serde(default, rename = "timespent", skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<TimeField>,
    #[serde(default, rename = "duedate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, rename = "resolutiondate", skip_serializing_if = "Option::is_none")]
    pub resolution_date: Option<String>,
}

/// An object identified by its display name (`{"name": "Done"}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, rename = "displayName")]
    pub display_name: String,
}

/// An issue with every field decoded into its semantic type.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueRecord {
    pub id: String,
    pub summary: String,
    pub status: String,
    pub assignee: Option<String>,
    pub project: String,
    pub estimated_hours: Option<f64>,
    pub pending_hours: Option<f64>,
    pub worked_hours: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub resolution_date: Option<NaiveDate>,
}

impl RawIssue {
    /// Decodes dates and hours.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the key or project is blank. Every
    /// other field degrades to `None` instead of failing.
    pub fn normalize(&self) -> Result<IssueRecord> {
        let nested = self.fields.as_ref();

        let id = either(&self.key, self.id.as_deref());
        if id.is_empty() {
            return Err(Error::MissingField { field: "key" });
        }
        let project = either(
            &self.project,
            nested.and_then(|f| f.project.as_ref()).map(|p| p.name.as_str()),
        );
        if project.is_empty() {
            return Err(Error::MissingField { field: "project" });
        }

        Ok(IssueRecord {
            id: id.to_string(),
            summary: either(&self.summary, nested.and_then(|f| f.summary.as_deref())).to_string(),
            status: either(
                &self.status,
                nested.and_then(|f| f.status.as_ref()).map(|s| s.name.as_str()),
            )
            .to_string(),
            assignee: non_blank(self.assignee.as_deref()).or_else(|| {
                non_blank(
                    nested
                        .and_then(|f| f.assignee.as_ref())
                        .map(|p| p.display_name.as_str()),
                )
            }),
            project: project.to_string(),
            estimated_hours: first_hours(
                &self.original_estimate,
                nested.and_then(|f| f.original_estimate.as_ref()),
            ),
            pending_hours: first_hours(
                &self.remaining_estimate,
                nested.and_then(|f| f.remaining_estimate.as_ref()),
            ),
            worked_hours: first_hours(
                &self.time_spent,
                nested.and_then(|f| f.time_spent.as_ref()),
            ),
            due_date: first_date(&self.due_date, nested.and_then(|f| f.due_date.as_deref())),
            resolution_date: first_date(
                &self.resolution_date,
                nested.and_then(|f| f.resolution_date.as_deref()),
            ),
        })
    }
}

/// One time entry as handed over by the time-tracking client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTimeEntry {
    /// Time-tracking project label.
    #[serde(default, alias = "projectName")]
    pub project: String,
    /// The time tracker's own client label.
    #[serde(default, alias = "clientName", skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, alias = "userName")]
    pub user: String,
    /// Time-tracking task label.
    #[serde(default, alias = "taskName", skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default)]
    pub duration: DurationField,
    /// The time tracker's interval block. A non-null duration here wins over
    /// `duration`.
    #[serde(
        default,
        rename = "timeInterval",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_interval: Option<TimeInterval>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// `null` while a timer is still running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationField>,
}

/// A normalized unit of logged time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub project: String,
    pub client: Option<String>,
    pub user: String,
    pub task: Option<String>,
    /// Logged time in whole milliseconds, never negative.
    pub millis: i64,
}

impl TimeEntry {
    pub fn hours(&self) -> f64 {
        millis_to_hours(self.millis)
    }
}

impl RawTimeEntry {
    /// Decodes the duration and trims labels. Never fails.
    pub fn normalize(&self) -> TimeEntry {
        let duration = self
            .time_interval
            .as_ref()
            .and_then(|interval| interval.duration.as_ref())
            .unwrap_or(&self.duration);
        TimeEntry {
            project: self.project.trim().to_string(),
            client: non_blank(self.client.as_deref()),
            user: self.user.trim().to_string(),
            task: non_blank(self.task.as_deref()),
            millis: duration.millis(),
        }
    }
}

fn first_hours(flat: &Option<TimeField>, nested: Option<&TimeField>) -> Option<f64> {
    flat.as_ref().or(nested).and_then(TimeField::hours)
}

fn first_date(flat: &Option<String>, nested: Option<&str>) -> Option<NaiveDate> {
    flat.as_deref().or(nested).and_then(parse_date)
}

/// The flat value when it is not blank, else the nested one. Trimmed.
fn either<'a>(flat: &'a str, nested: Option<&'a str>) -> &'a str {
    let flat = flat.trim();
    if flat.is_empty() {
        nested.map(str::trim).unwrap_or("")
    } else {
        flat
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
