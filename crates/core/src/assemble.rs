// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard assembly.
//!
//! Finalizes the accumulators into the nested output document: clients and
//! projects sorted by name, hour totals rounded to the configured precision,
//! people sorted by descending hours and tasks in display order.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::{HoursLedger, IssueRollup, ProjectTasks, TimeRollup, UnmappedPolicy};
use crate::classify::Task;
use crate::error::{Error, Result};
use crate::normalize::{millis_to_hours, round_to};
use crate::taxonomy::Taxonomy;

/// Deployment choices that shape the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Decimal places for aggregated hour totals (1 or 2).
    pub precision: u32,
    /// Handling of time entries with no taxonomy mapping.
    pub unmapped: UnmappedPolicy,
}

impl ReportOptions {
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrecision`] unless `precision` is 1 or 2.
    pub fn new(precision: u32, unmapped: UnmappedPolicy) -> Result<Self> {
        if !(1..=2).contains(&precision) {
            return Err(Error::InvalidPrecision(precision));
        }
        Ok(ReportOptions {
            precision,
            unmapped,
        })
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            precision: 2,
            unmapped: UnmappedPolicy::RawClient,
        }
    }
}

/// The complete reporting dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Dashboard {
    /// When the dataset was built.
    pub generated_at: DateTime<Utc>,
    /// Clients sorted by name.
    pub clients: Vec<ClientReport>,
}

/// One client with its KPIs and projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ClientReport {
    pub name: String,
    /// Display color (CSS hex).
    pub color: String,
    pub kpis: Kpis,
    /// Projects sorted by name.
    pub projects: Vec<ProjectReport>,
}

/// Client-level totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Kpis {
    pub estimated_hours: f64,
    pub consumed_hours: f64,
    pub pending_hours: f64,
    /// Logged time attributed to the client, including unmapped labels
    /// that fell back to the client's raw name.
    pub time_tracked_hours: f64,
    pub task_count: usize,
    pub project_count: usize,
}

/// One issue-tracker project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ProjectReport {
    pub name: String,
    pub estimated_hours: f64,
    pub consumed_hours_from_issues: f64,
    pub pending_hours: f64,
    pub time_tracked_hours: f64,
    pub task_count: usize,
    /// Logged time per person, most hours first.
    pub people: Vec<PersonHours>,
    /// Logged time per time-tracking task label, most hours first.
    pub time_by_task: Vec<LabelHours>,
    /// Estimated tasks first, then by due date.
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PersonHours {
    pub name: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct LabelHours {
    pub label: String,
    pub hours: f64,
}

/// Builds the dashboard from finished accumulators.
///
/// Clients appear if they own tasks or have logged time.
pub fn assemble(
    issues: IssueRollup,
    time: &TimeRollup,
    taxonomy: &Taxonomy,
    options: &ReportOptions,
    generated_at: DateTime<Utc>,
) -> Dashboard {
    let mut by_client = issues.into_clients();
    let names: BTreeSet<String> = by_client
        .keys()
        .cloned()
        .chain(time.clients().map(String::from))
        .collect();

    let clients = names
        .into_iter()
        .map(|name| {
            let projects = by_client.remove(&name).unwrap_or_default();
            client_report(name, projects, time, taxonomy, options.precision)
        })
        .collect();

    Dashboard {
        generated_at,
        clients,
    }
}

fn client_report(
    name: String,
    projects: BTreeMap<String, ProjectTasks>,
    time: &TimeRollup,
    taxonomy: &Taxonomy,
    precision: u32,
) -> ClientReport {
    let mut estimated = 0;
    let mut consumed = 0;
    let mut pending = 0;
    let mut task_count = 0;
    let project_count = projects.len();

    let projects: Vec<ProjectReport> = projects
        .into_iter()
        .map(|(project, tasks)| {
            estimated += tasks.estimated;
            consumed += tasks.consumed;
            pending += tasks.pending;
            task_count += tasks.tasks.len();
            let ledger = time.project(&project);
            project_report(project, tasks, ledger, precision)
        })
        .collect();

    let tracked = time.client(&name).map_or(0.0, HoursLedger::total_hours);

    ClientReport {
        color: taxonomy.color_of(&name).to_string(),
        kpis: Kpis {
            estimated_hours: hours(estimated, precision),
            consumed_hours: hours(consumed, precision),
            pending_hours: hours(pending, precision),
            time_tracked_hours: round_to(tracked, precision),
            task_count,
            project_count,
        },
        name,
        projects,
    }
}

fn project_report(
    name: String,
    project: ProjectTasks,
    ledger: Option<&HoursLedger>,
    precision: u32,
) -> ProjectReport {
    let mut tasks = project.tasks;
    sort_tasks(&mut tasks);

    let (tracked, people, time_by_task) = match ledger {
        Some(ledger) => (
            ledger.total_hours(),
            ranked(&ledger.people, precision)
                .map(|(name, hours)| PersonHours { name, hours })
                .collect(),
            ranked(&ledger.labels, precision)
                .map(|(label, hours)| LabelHours { label, hours })
                .collect(),
        ),
        None => (0.0, Vec::new(), Vec::new()),
    };

    ProjectReport {
        name,
        estimated_hours: hours(project.estimated, precision),
        consumed_hours_from_issues: hours(project.consumed, precision),
        pending_hours: hours(project.pending, precision),
        time_tracked_hours: round_to(tracked, precision),
        task_count: tasks.len(),
        people,
        time_by_task,
        tasks,
    }
}

/// Milliseconds as hours rounded to `precision`.
fn hours(millis: i64, precision: u32) -> f64 {
    round_to(millis_to_hours(millis), precision)
}

/// Rounded `(key, hours)` pairs, most time first, ties by key.
fn ranked(millis: &BTreeMap<String, i64>, precision: u32) -> impl Iterator<Item = (String, f64)> + '_ {
    let mut pairs: Vec<(&String, i64)> = millis.iter().map(|(key, ms)| (key, *ms)).collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    pairs
        .into_iter()
        .map(move |(key, ms)| (key.clone(), hours(ms, precision)))
}

/// Display order: tasks without an estimate last, then tasks without a due
/// date last, then by due date, then by id.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(compare_tasks);
}

fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    (a.estimated_hours.is_none(), a.due_date.is_none(), a.due_date)
        .cmp(&(b.estimated_hours.is_none(), b.due_date.is_none(), b.due_date))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
#[path = "assemble_tests.rs"]
mod tests;
