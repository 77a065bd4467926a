// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::aggregate::UnmappedPolicy;
use crate::assemble::ReportOptions;
use crate::record::{DurationField, TimeField};
use crate::status::Light;
use chrono::TimeZone;
use yare::parameterized;

struct Fixture {
    taxonomy: Taxonomy,
    completion: CompletionStatuses,
    options: ReportOptions,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            taxonomy: Taxonomy::builtin(),
            completion: CompletionStatuses::default(),
            options: ReportOptions::default(),
        }
    }

    fn with_options(options: ReportOptions) -> Self {
        Fixture {
            options,
            ..Fixture::new()
        }
    }

    fn ctx(&self) -> BuildContext<'_> {
        BuildContext {
            taxonomy: &self.taxonomy,
            completion: &self.completion,
            options: &self.options,
            today: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            generated_at: Utc.with_ymd_and_hms(2026, 1, 12, 8, 30, 0).unwrap(),
        }
    }
}

fn issue(key: &str, project: &str, status: &str) -> RawIssue {
    RawIssue {
        key: key.into(),
        summary: format!("{key} summary"),
        status: status.into(),
        project: project.into(),
        ..Default::default()
    }
}

fn entry(label: &str, client: Option<&str>, user: &str, seconds: i64) -> RawTimeEntry {
    RawTimeEntry {
        project: label.into(),
        client: client.map(String::from),
        user: user.into(),
        duration: DurationField::Seconds(seconds),
        ..Default::default()
    }
}

#[test]
fn two_tasks_in_one_project_end_to_end() {
    let fixture = Fixture::new();

    // Complete, resolved two days early.
    let done = RawIssue {
        original_estimate: Some(TimeField::Seconds(36_000)),
        time_spent: Some(TimeField::Seconds(28_800)),
        due_date: Some("10/ene/26".into()),
        resolution_date: Some("2026-01-08T16:00:00.000-0300".into()),
        assignee: Some("Ana".into()),
        ..issue("TESLA-1", "TRANSENER TESLA", "Finalizada")
    };
    // Open, due in three days, no estimate.
    let open = RawIssue {
        time_spent: Some(TimeField::Seconds(7_200)),
        due_date: Some("2026-01-15".into()),
        ..issue("TESLA-2", "TRANSENER TESLA", "En curso")
    };

    let report = build_report(vec![open, done], Vec::new(), &fixture.ctx());
    let client = &report.dashboard.clients[0];
    assert_eq!(client.name, "Transener");
    assert_eq!(client.kpis.task_count, 2);
    assert_eq!(client.kpis.estimated_hours, 10.0);
    assert_eq!(client.kpis.consumed_hours, 10.0);

    let project = &client.projects[0];
    assert_eq!(project.task_count, 2);
    assert_eq!(project.estimated_hours, 10.0);

    let first = &project.tasks[0];
    assert_eq!(first.id, "TESLA-1");
    assert_eq!(first.deviation_days, Some(-2));
    assert_eq!(first.schedule_status, Light::Green);
    assert_eq!(first.effort_status, Light::Green);

    // The estimate-less task sorts last and keeps its own lights.
    let last = &project.tasks[1];
    assert_eq!(last.id, "TESLA-2");
    assert_eq!(last.assignee, "Unassigned");
    assert_eq!(last.schedule_status, Light::Yellow);
    assert_eq!(last.effort_status, Light::Gray);

    assert_eq!(report.stats.tasks, 2);
}

#[test]
fn unmapped_issue_projects_are_excluded() {
    let fixture = Fixture::new();
    let issues = vec![
        issue("BAY-1", "Bayer", "Open"),
        issue("INT-1", "Internal Tools", "Open"),
    ];

    let report = build_report(issues, Vec::new(), &fixture.ctx());
    assert_eq!(report.dashboard.clients.len(), 1);
    assert_eq!(report.stats.unmapped_issues, 1);
    assert_eq!(report.stats.tasks, 1);
}

#[test]
fn rejected_issue_does_not_abort_batch() {
    let fixture = Fixture::new();
    let issues = vec![
        issue("", "Bayer", "Open"),
        issue("BAY-2", "Bayer", "Open"),
        issue("BAY-3", "", "Open"),
    ];

    let report = build_report(issues, Vec::new(), &fixture.ctx());
    assert_eq!(report.stats.issues_seen, 3);
    assert_eq!(report.stats.rejected_issues, 2);
    assert_eq!(report.dashboard.clients[0].kpis.task_count, 1);
}

#[test]
fn unmapped_label_counts_for_raw_client_only() {
    let fixture = Fixture::new();
    let entries = vec![
        entry("Vacaciones", Some("Interno"), "Ana", 28_800),
        entry("Tesla", Some("Transener"), "Ana", 3_600),
    ];
    let issues = vec![issue("TESLA-1", "TRANSENER TESLA", "Open")];

    let report = build_report(issues, entries, &fixture.ctx());
    let names: Vec<&str> = report
        .dashboard
        .clients
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Interno", "Transener"]);

    let interno = &report.dashboard.clients[0];
    assert_eq!(interno.kpis.time_tracked_hours, 8.0);
    assert!(interno.projects.is_empty());

    let transener = &report.dashboard.clients[1];
    assert_eq!(transener.kpis.time_tracked_hours, 1.0);
    assert_eq!(transener.projects[0].time_tracked_hours, 1.0);

    assert_eq!(report.stats.entries_without_project, 1);
    assert_eq!(report.stats.entries_without_client, 0);
}

#[test]
fn drop_policy_discards_unmapped_labels() {
    let options = ReportOptions::new(2, UnmappedPolicy::Drop).unwrap();
    let fixture = Fixture::with_options(options);
    let entries = vec![entry("Vacaciones", Some("Interno"), "Ana", 28_800)];

    let report = build_report(Vec::new(), entries, &fixture.ctx());
    assert!(report.dashboard.clients.is_empty());
    assert_eq!(report.stats.entries_without_client, 1);
}

#[test]
fn dashboard_is_independent_of_input_order() {
    let fixture = Fixture::new();
    let issues = vec![
        RawIssue {
            original_estimate: Some(TimeField::Seconds(9_000)),
            due_date: Some("2026-01-20".into()),
            ..issue("SAC-1", "SACDE PORTAL", "Open")
        },
        RawIssue {
            original_estimate: Some(TimeField::Seconds(1_800)),
            ..issue("SAC-2", "SACDE Mantenimiento", "Done")
        },
        issue("BAY-1", "Bayer", "Open"),
        RawIssue {
            original_estimate: Some(TimeField::Seconds(5_400)),
            due_date: Some("2026-01-14".into()),
            ..issue("SAC-3", "SACDE PORTAL", "Open")
        },
    ];
    let entries = vec![
        entry("Soporte", None, "Luis", 2_700),
        entry("Portal de Proveedores FASE 1", None, "Ana", 5_400),
        entry("Portal de Proveedores FASE 2", None, "Luis", 900),
        entry("Vacaciones", Some("Interno"), "Ana", 3_600),
    ];

    let forward = build_report(issues.clone(), entries.clone(), &fixture.ctx());

    let mut issues_rev = issues.clone();
    issues_rev.reverse();
    let mut entries_rev = entries.clone();
    entries_rev.reverse();
    let backward = build_report(issues_rev, entries_rev, &fixture.ctx());

    assert_eq!(forward.dashboard, backward.dashboard);
    assert_eq!(forward.stats, backward.stats);
}

#[test]
fn sharded_folds_merge_to_the_same_dashboard() {
    let fixture = Fixture::new();
    let ctx = fixture.ctx();
    let issues = vec![
        issue("SAC-1", "SACDE PORTAL", "Open"),
        issue("BAY-1", "Bayer", "Open"),
        issue("SAC-2", "SACDE PORTAL", "Open"),
    ];
    let entries = vec![
        entry("Soporte", None, "Luis", 2_700),
        entry("Mejoras Solped", None, "Ana", 5_400),
        entry("Soporte", None, "Ana", 900),
    ];

    let whole = build_report(issues.clone(), entries.clone(), &ctx);

    let mut stats = BuildStats::default();
    let mut issue_rollup = fold_issues(issues[..1].to_vec(), &ctx, &mut stats);
    issue_rollup.merge(fold_issues(issues[1..].to_vec(), &ctx, &mut stats));
    let mut time_rollup = fold_entries(entries[..2].to_vec(), &ctx, &mut stats);
    time_rollup.merge(fold_entries(entries[2..].to_vec(), &ctx, &mut stats));

    let merged = assemble(
        issue_rollup,
        &time_rollup,
        ctx.taxonomy,
        ctx.options,
        ctx.generated_at,
    );
    assert_eq!(merged, whole.dashboard);
    assert_eq!(stats, whole.stats);
}

// ─────────────────────────────────────────────────────────────────────────────
// Exact totals
// ─────────────────────────────────────────────────────────────────────────────

/// Every ordering of `0..n`.
fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for rest in permutations(n - 1) {
        for pos in 0..=rest.len() {
            let mut order = rest.clone();
            order.insert(pos, n - 1);
            out.push(order);
        }
    }
    out
}

fn bayer_inputs() -> (Vec<RawIssue>, Vec<RawTimeEntry>) {
    let issues = [360, 720, 2_520]
        .iter()
        .enumerate()
        .map(|(i, seconds)| RawIssue {
            original_estimate: Some(TimeField::Seconds(*seconds)),
            ..issue(&format!("BAY-{i}"), "Bayer", "Open")
        })
        .collect();
    let entries = vec![
        entry("Mejoras Solped", None, "Ana", 8_100),
        entry("App Facilites", None, "Luis", 12_672),
        entry("Mejoras Solped", None, "Luis", 11_808),
    ];
    (issues, entries)
}

#[parameterized(
    one_decimal = { 1, 9.1, 6.8 },
    two_decimals = { 2, 9.05, 6.8 },
)]
fn totals_are_identical_in_every_input_order(precision: u32, tracked: f64, luis: f64) {
    let options = ReportOptions::new(precision, UnmappedPolicy::RawClient).unwrap();
    let fixture = Fixture::with_options(options);
    let (issues, entries) = bayer_inputs();

    let orders = permutations(3);
    assert_eq!(orders.len(), 6);

    let mut first: Option<Dashboard> = None;
    for issue_order in &orders {
        for entry_order in &orders {
            let ordered_issues: Vec<RawIssue> =
                issue_order.iter().map(|i| issues[*i].clone()).collect();
            let ordered_entries: Vec<RawTimeEntry> =
                entry_order.iter().map(|i| entries[*i].clone()).collect();
            let report = build_report(ordered_issues, ordered_entries, &fixture.ctx());

            let client = &report.dashboard.clients[0];
            assert_eq!(client.kpis.time_tracked_hours, tracked, "{entry_order:?}");
            assert_eq!(client.kpis.estimated_hours, 1.0, "{issue_order:?}");
            assert_eq!(client.projects[0].people[0].name, "Luis");
            assert_eq!(client.projects[0].people[0].hours, luis);

            match &first {
                None => first = Some(report.dashboard),
                Some(expected) => assert_eq!(&report.dashboard, expected),
            }
        }
    }
}

#[parameterized(
    one_decimal = { 1 },
    two_decimals = { 2 },
)]
fn shards_merge_to_exact_totals(precision: u32) {
    let options = ReportOptions::new(precision, UnmappedPolicy::RawClient).unwrap();
    let fixture = Fixture::with_options(options);
    let ctx = fixture.ctx();
    let (issues, entries) = bayer_inputs();
    let whole = build_report(issues.clone(), entries.clone(), &ctx);

    for split in 1..entries.len() {
        let mut stats = BuildStats::default();
        let mut issue_rollup = fold_issues(issues[split..].to_vec(), &ctx, &mut stats);
        issue_rollup.merge(fold_issues(issues[..split].to_vec(), &ctx, &mut stats));
        let mut time_rollup = fold_entries(entries[split..].to_vec(), &ctx, &mut stats);
        time_rollup.merge(fold_entries(entries[..split].to_vec(), &ctx, &mut stats));

        let merged = assemble(
            issue_rollup,
            &time_rollup,
            ctx.taxonomy,
            ctx.options,
            ctx.generated_at,
        );
        assert_eq!(merged, whole.dashboard, "split at {split}");
        assert_eq!(stats, whole.stats, "split at {split}");
    }
}
