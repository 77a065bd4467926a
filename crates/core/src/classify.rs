// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Task classification.
//!
//! Turns one [`IssueRecord`] into a [`Task`] carrying derived fields: the
//! effective consumed hours, the deviation from the due date, the completion
//! flag and two independent traffic lights (schedule and effort).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::normalize::{round_to, TASK_PRECISION};
use crate::record::IssueRecord;
use crate::status::{CompletionStatuses, Light};

/// Assignee shown for issues without one.
pub const UNASSIGNED: &str = "Unassigned";

/// Days before the due date at which an open task turns yellow.
pub const DUE_SOON_DAYS: i64 = 7;

/// Share of the estimate at which an open task's effort turns yellow.
pub const EFFORT_WARNING_RATIO: f64 = 0.8;

/// One classified issue. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Task {
    /// Issue key.
    pub id: String,
    pub summary: String,
    /// Raw status name.
    pub status: String,
    pub assignee: String,
    pub estimated_hours: Option<f64>,
    /// Reported worked hours, or estimate minus pending when not reported.
    pub consumed_hours: Option<f64>,
    pub pending_hours: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub resolution_date: Option<NaiveDate>,
    /// Resolution minus due date in days; positive means late.
    pub deviation_days: Option<i64>,
    /// Consumed hours exceed the estimate.
    pub over_estimate: bool,
    pub complete: bool,
    pub schedule_status: Light,
    pub effort_status: Light,
}

/// Classifies a normalized issue against `today`.
pub fn classify(record: &IssueRecord, today: NaiveDate, completion: &CompletionStatuses) -> Task {
    let complete = completion.is_complete(&record.status);
    let estimated = record.estimated_hours.map(|h| round_to(h, TASK_PRECISION));
    let pending = record.pending_hours.map(|h| round_to(h, TASK_PRECISION));
    let consumed = effective_consumed(record.worked_hours, estimated, pending);
    let deviation = day_deviation(record.due_date, record.resolution_date);
    let schedule_status = schedule_status(record.due_date, complete, deviation, today);
    let effort_status = effort_status(estimated, consumed, complete);

    Task {
        id: record.id.clone(),
        summary: record.summary.clone(),
        status: record.status.clone(),
        assignee: record
            .assignee
            .clone()
            .unwrap_or_else(|| UNASSIGNED.to_string()),
        estimated_hours: estimated,
        consumed_hours: consumed,
        pending_hours: pending,
        due_date: record.due_date,
        resolution_date: record.resolution_date,
        deviation_days: deviation,
        over_estimate: effort_status == Light::Red,
        complete,
        schedule_status,
        effort_status,
    }
}

/// Best available figure for hours spent.
///
/// Reported hours win; otherwise estimate minus pending when both exist.
/// The difference is not clamped and may be negative.
pub fn effective_consumed(
    worked: Option<f64>,
    estimated: Option<f64>,
    pending: Option<f64>,
) -> Option<f64> {
    match (worked, estimated, pending) {
        (Some(worked), _, _) => Some(round_to(worked, TASK_PRECISION)),
        (None, Some(estimated), Some(pending)) => {
            Some(round_to(estimated - pending, TASK_PRECISION))
        }
        _ => None,
    }
}

/// Signed days between resolution and due date.
pub fn day_deviation(due: Option<NaiveDate>, resolved: Option<NaiveDate>) -> Option<i64> {
    match (due, resolved) {
        (Some(due), Some(resolved)) => Some((resolved - due).num_days()),
        _ => None,
    }
}

/// Schedule light. First matching rule wins:
///
/// 1. no due date: gray
/// 2. complete: green unless resolved after the due date (red)
/// 3. open: red when overdue, yellow within [`DUE_SOON_DAYS`], else green
pub fn schedule_status(
    due: Option<NaiveDate>,
    complete: bool,
    deviation: Option<i64>,
    today: NaiveDate,
) -> Light {
    let Some(due) = due else {
        return Light::Gray;
    };

    if complete {
        return match deviation {
            Some(days) if days > 0 => Light::Red,
            _ => Light::Green,
        };
    }

    let days_remaining = (due - today).num_days();
    if days_remaining < 0 {
        Light::Red
    } else if days_remaining <= DUE_SOON_DAYS {
        Light::Yellow
    } else {
        Light::Green
    }
}

/// Effort light. First matching rule wins:
///
/// 1. no estimate (or a zero estimate) or no consumed figure: gray
/// 2. consumed above estimate: red
/// 3. open and at least [`EFFORT_WARNING_RATIO`] of the estimate used: yellow
/// 4. green
pub fn effort_status(estimated: Option<f64>, consumed: Option<f64>, complete: bool) -> Light {
    let (Some(estimated), Some(consumed)) = (estimated.filter(|e| *e != 0.0), consumed) else {
        return Light::Gray;
    };

    if consumed > estimated {
        Light::Red
    } else if !complete && estimated > 0.0 && consumed / estimated >= EFFORT_WARNING_RATIO {
        Light::Yellow
    } else {
        Light::Green
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
