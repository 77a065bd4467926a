// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Builds the dashboard dataset from exported records.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::{info, warn};

use pb_core::csv_export::{read_entry_csv, read_issue_csv};
use pb_core::jsonl::{read_records, Records};
use pb_core::{build_report, BuildContext, Dashboard, RawIssue, RawTimeEntry, Report};

use crate::cli::{BuildArgs, BuildFormat};
use crate::config::Config;
use crate::error::{Error, Result};

const JS_VARIABLE: &str = "window.DASHBOARD_DATA";

type Reader<T> = fn(&Path) -> pb_core::Result<Records<T>>;

pub fn run(base_dir: &Path, config: &Config, args: &BuildArgs) -> Result<()> {
    let today = resolve_today(args.today.as_deref())?;
    let report = run_impl(base_dir, config, args, today, Utc::now())?;
    let rendered = render(&report.dashboard, args.format)?;

    match output_path(base_dir, args) {
        None => {
            io::stdout().lock().write_all(rendered.as_bytes())?;
            write_summary(&mut io::stderr().lock(), &report)?;
        }
        Some(path) => {
            fs::write(&path, rendered)?;
            info!(path = %path.display(), "wrote dataset");
            let mut stdout = io::stdout().lock();
            write_summary(&mut stdout, &report)?;
            writeln!(stdout, "Wrote {}", path.display())?;
        }
    }
    Ok(())
}

/// Reads the inputs and runs the pipeline.
pub(crate) fn run_impl(
    base_dir: &Path,
    config: &Config,
    args: &BuildArgs,
    today: NaiveDate,
    generated_at: DateTime<Utc>,
) -> Result<Report> {
    let taxonomy = config.taxonomy()?;
    let completion = config.completion_statuses();
    let options = config.report_options(args.precision, args.no_client_fallback)?;

    let issues_path = base_dir.join(&args.issues);
    let issues = load(&issues_path, issue_reader(&issues_path))?;
    let entries = match &args.entries {
        Some(path) => {
            let path = base_dir.join(path);
            load(&path, entry_reader(&path))?
        }
        None => Vec::new(),
    };
    info!(
        issues = issues.len(),
        entries = entries.len(),
        %today,
        "building dashboard"
    );

    let ctx = BuildContext {
        taxonomy: &taxonomy,
        completion: &completion,
        options: &options,
        today,
        generated_at,
    };
    Ok(build_report(issues, entries, &ctx))
}

/// `.csv` files are tracker exports, anything else is JSON.
fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn issue_reader(path: &Path) -> Reader<RawIssue> {
    if is_csv(path) {
        read_issue_csv
    } else {
        read_records::<RawIssue>
    }
}

fn entry_reader(path: &Path) -> Reader<RawTimeEntry> {
    if is_csv(path) {
        read_entry_csv
    } else {
        read_records::<RawTimeEntry>
    }
}

fn load<T>(path: &Path, read: Reader<T>) -> Result<Vec<T>> {
    let records = read(path).map_err(|e| match e {
        pb_core::Error::Io(source) => Error::Input {
            path: path.display().to_string(),
            source,
        },
        other => other.into(),
    })?;
    for bad in &records.errors {
        warn!(
            path = %path.display(),
            line = bad.line,
            reason = %bad.reason,
            "skipping undecodable record"
        );
    }
    Ok(records.records)
}

/// `--today`, or the local calendar date.
pub(crate) fn resolve_today(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(s.to_string())),
        None => Ok(Local::now().date_naive()),
    }
}

/// Destination file, or `None` for stdout.
pub(crate) fn output_path(base_dir: &Path, args: &BuildArgs) -> Option<PathBuf> {
    match &args.out {
        Some(path) if path.as_os_str() == "-" => None,
        Some(path) => Some(base_dir.join(path)),
        None => Some(base_dir.join(args.format.default_file_name())),
    }
}

pub(crate) fn render(dashboard: &Dashboard, format: BuildFormat) -> Result<String> {
    let json = serde_json::to_string_pretty(dashboard)?;
    Ok(match format {
        BuildFormat::Json => format!("{}\n", json),
        BuildFormat::Js => format!("{} = {};\n", JS_VARIABLE, json),
    })
}

/// One line per client, then what was skipped.
pub(crate) fn write_summary<W: Write>(w: &mut W, report: &Report) -> io::Result<()> {
    for client in &report.dashboard.clients {
        let kpis = &client.kpis;
        writeln!(
            w,
            "{}: {} tasks, {} estimated h, {} tracked h",
            client.name, kpis.task_count, kpis.estimated_hours, kpis.time_tracked_hours
        )?;
    }

    let stats = &report.stats;
    writeln!(
        w,
        "Skipped: {} rejected issues, {} unmapped issues, {} entries without project, {} entries without client",
        stats.rejected_issues,
        stats.unmapped_issues,
        stats.entries_without_project,
        stats.entries_without_client
    )
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
