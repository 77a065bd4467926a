// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyed accumulators for tasks and logged time.
//!
//! Accumulators are plain maps filled by `add` and combined by `merge`.
//! Both operations are pure summation over whole milliseconds, so the
//! result does not depend on arrival order and shards folded separately
//! merge to the same totals. Conversion to hours and rounding happen at
//! assembly.

use std::collections::BTreeMap;

use crate::classify::Task;
use crate::normalize::{hours_to_millis, millis_to_hours};
use crate::record::TimeEntry;
use crate::taxonomy::Taxonomy;

/// Running milliseconds with per-person and per-label breakdowns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoursLedger {
    pub total: i64,
    pub people: BTreeMap<String, i64>,
    /// Time-tracking task label -> milliseconds. Only filled for projects.
    pub labels: BTreeMap<String, i64>,
}

impl HoursLedger {
    /// Adds time for one person and, optionally, one task label.
    pub fn record(&mut self, person: &str, label: Option<&str>, millis: i64) {
        self.total += millis;
        *self.people.entry(person.to_string()).or_default() += millis;
        if let Some(label) = label {
            *self.labels.entry(label.to_string()).or_default() += millis;
        }
    }

    /// Folds another ledger into this one.
    pub fn merge(&mut self, other: HoursLedger) {
        self.total += other.total;
        for (person, millis) in other.people {
            *self.people.entry(person).or_default() += millis;
        }
        for (label, millis) in other.labels {
            *self.labels.entry(label).or_default() += millis;
        }
    }

    pub fn total_hours(&self) -> f64 {
        millis_to_hours(self.total)
    }
}

/// Tasks of one project plus their running sums in milliseconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectTasks {
    pub tasks: Vec<Task>,
    pub estimated: i64,
    pub consumed: i64,
    pub pending: i64,
}

impl ProjectTasks {
    fn push(&mut self, task: Task) {
        self.estimated += task.estimated_hours.map_or(0, hours_to_millis);
        self.consumed += task.consumed_hours.map_or(0, hours_to_millis);
        self.pending += task.pending_hours.map_or(0, hours_to_millis);
        self.tasks.push(task);
    }

    fn merge(&mut self, other: ProjectTasks) {
        self.estimated += other.estimated;
        self.consumed += other.consumed;
        self.pending += other.pending;
        self.tasks.extend(other.tasks);
    }
}

/// Client -> project -> tasks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueRollup {
    clients: BTreeMap<String, BTreeMap<String, ProjectTasks>>,
}

impl IssueRollup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a classified task under its project and client.
    pub fn add(&mut self, task: Task, project: &str, client: &str) {
        self.clients
            .entry(client.to_string())
            .or_default()
            .entry(project.to_string())
            .or_default()
            .push(task);
    }

    /// Folds another rollup into this one.
    pub fn merge(&mut self, other: IssueRollup) {
        for (client, projects) in other.clients {
            let mine = self.clients.entry(client).or_default();
            for (project, tasks) in projects {
                mine.entry(project).or_default().merge(tasks);
            }
        }
    }

    /// Consumes the rollup, yielding client -> project -> tasks.
    pub fn into_clients(self) -> BTreeMap<String, BTreeMap<String, ProjectTasks>> {
        self.clients
    }
}

/// What to do with time entries whose label has no taxonomy mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedPolicy {
    /// Count them under the time tracker's own client label, if any.
    #[default]
    RawClient,
    /// Leave them out of every client total.
    Drop,
}

/// Resolves an entry's issue-tracker project and effective client.
///
/// The client is the owner of the mapped project. Failing that, under
/// [`UnmappedPolicy::RawClient`], it is the entry's raw client label.
pub fn resolve_entry<'a>(
    entry: &'a TimeEntry,
    taxonomy: &'a Taxonomy,
    policy: UnmappedPolicy,
) -> (Option<&'a str>, Option<&'a str>) {
    let project = taxonomy.issue_project_of(&entry.project);
    let client = project
        .and_then(|p| taxonomy.client_of(p))
        .or(match policy {
            UnmappedPolicy::RawClient => entry.client.as_deref(),
            UnmappedPolicy::Drop => None,
        });
    (project, client)
}

/// Logged time per issue-tracker project and per client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeRollup {
    projects: BTreeMap<String, HoursLedger>,
    clients: BTreeMap<String, HoursLedger>,
}

impl TimeRollup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one entry under its resolved project and client.
    ///
    /// Entries without a project never reach a project ledger; entries
    /// without a client never reach a client ledger.
    pub fn add(&mut self, entry: &TimeEntry, project: Option<&str>, client: Option<&str>) {
        if let Some(project) = project {
            self.projects.entry(project.to_string()).or_default().record(
                &entry.user,
                entry.task.as_deref(),
                entry.millis,
            );
        }
        if let Some(client) = client {
            self.clients
                .entry(client.to_string())
                .or_default()
                .record(&entry.user, None, entry.millis);
        }
    }

    /// Folds another rollup into this one.
    pub fn merge(&mut self, other: TimeRollup) {
        for (project, ledger) in other.projects {
            self.projects.entry(project).or_default().merge(ledger);
        }
        for (client, ledger) in other.clients {
            self.clients.entry(client).or_default().merge(ledger);
        }
    }

    pub fn project(&self, project: &str) -> Option<&HoursLedger> {
        self.projects.get(project)
    }

    pub fn client(&self, client: &str) -> Option<&HoursLedger> {
        self.clients.get(client)
    }

    /// Client names with logged time, sorted.
    pub fn clients(&self) -> impl Iterator<Item = &str> {
        self.clients.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
