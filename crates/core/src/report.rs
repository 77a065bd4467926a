// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end report build.
//!
//! Raw issues are normalized, classified and filed under their client; raw
//! time entries are normalized, resolved and folded; both rollups are then
//! assembled into a [`Dashboard`]. A record that cannot be normalized is
//! logged and skipped without affecting the rest of the batch.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregate::{resolve_entry, IssueRollup, TimeRollup};
use crate::assemble::{assemble, Dashboard, ReportOptions};
use crate::classify::classify;
use crate::record::{RawIssue, RawTimeEntry};
use crate::status::CompletionStatuses;
use crate::taxonomy::Taxonomy;

/// Counters describing what happened to the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    pub issues_seen: usize,
    /// Issues classified into the dashboard.
    pub tasks: usize,
    /// Issues whose project has no client mapping.
    pub unmapped_issues: usize,
    /// Issues rejected for missing identity fields.
    pub rejected_issues: usize,
    pub entries_seen: usize,
    /// Entries that reached no project total.
    pub entries_without_project: usize,
    /// Entries that reached no client total.
    pub entries_without_client: usize,
}

/// Dashboard plus build statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub dashboard: Dashboard,
    pub stats: BuildStats,
}

/// Everything a build needs besides the records themselves.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub taxonomy: &'a Taxonomy,
    pub completion: &'a CompletionStatuses,
    pub options: &'a ReportOptions,
    /// Reference date for schedule status of open tasks.
    pub today: NaiveDate,
    pub generated_at: DateTime<Utc>,
}

/// Folds raw issues into an [`IssueRollup`].
pub fn fold_issues<I>(issues: I, ctx: &BuildContext<'_>, stats: &mut BuildStats) -> IssueRollup
where
    I: IntoIterator<Item = RawIssue>,
{
    let mut rollup = IssueRollup::new();
    for raw in issues {
        stats.issues_seen += 1;
        let record = match raw.normalize() {
            Ok(record) => record,
            Err(e) => {
                warn!(key = %raw.key, "skipping issue: {}", e);
                stats.rejected_issues += 1;
                continue;
            }
        };
        let Some(client) = ctx.taxonomy.client_of(&record.project) else {
            debug!(key = %record.id, project = %record.project, "project has no client, skipping");
            stats.unmapped_issues += 1;
            continue;
        };
        let task = classify(&record, ctx.today, ctx.completion);
        rollup.add(task, &record.project, client);
        stats.tasks += 1;
    }
    rollup
}

/// Folds raw time entries into a [`TimeRollup`].
pub fn fold_entries<I>(entries: I, ctx: &BuildContext<'_>, stats: &mut BuildStats) -> TimeRollup
where
    I: IntoIterator<Item = RawTimeEntry>,
{
    let mut rollup = TimeRollup::new();
    for raw in entries {
        stats.entries_seen += 1;
        let entry = raw.normalize();
        let (project, client) = resolve_entry(&entry, ctx.taxonomy, ctx.options.unmapped);
        if project.is_none() {
            debug!(label = %entry.project, "time-tracking label has no project mapping");
            stats.entries_without_project += 1;
        }
        if client.is_none() {
            stats.entries_without_client += 1;
        }
        rollup.add(&entry, project, client);
    }
    rollup
}

/// Runs the whole pipeline.
pub fn build_report<I, E>(issues: I, entries: E, ctx: &BuildContext<'_>) -> Report
where
    I: IntoIterator<Item = RawIssue>,
    E: IntoIterator<Item = RawTimeEntry>,
{
    let mut stats = BuildStats::default();
    let issue_rollup = fold_issues(issues, ctx, &mut stats);
    let time_rollup = fold_entries(entries, ctx, &mut stats);

    debug!(
        tasks = stats.tasks,
        entries = stats.entries_seen,
        "assembling dashboard"
    );
    let dashboard = assemble(
        issue_rollup,
        &time_rollup,
        ctx.taxonomy,
        ctx.options,
        ctx.generated_at,
    );

    Report { dashboard, stats }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
