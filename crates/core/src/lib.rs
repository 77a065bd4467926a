// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pb-core: reconciliation engine for the projboard reporting tool.
//!
//! This crate turns issue-tracker records and time-tracking entries into a
//! per-client, per-project dashboard dataset. It has no knowledge of where
//! records come from or where the output goes.
//!
//! Pipeline: [`record`] normalization (via [`normalize`]) -> [`classify`] ->
//! [`aggregate`] (keyed by [`taxonomy`]) -> [`assemble`]. The [`report`]
//! module wires the stages together. [`jsonl`] and [`csv_export`] read
//! record files.

pub mod aggregate;
pub mod assemble;
pub mod classify;
pub mod csv_export;
pub mod error;
pub mod jsonl;
pub mod normalize;
pub mod record;
pub mod report;
pub mod status;
pub mod taxonomy;

pub use aggregate::{HoursLedger, IssueRollup, TimeRollup, UnmappedPolicy};
pub use assemble::{ClientReport, Dashboard, Kpis, ProjectReport, ReportOptions};
pub use classify::{classify, Task};
pub use error::{Error, Result};
pub use record::{IssueRecord, RawIssue, RawTimeEntry, TimeEntry};
pub use report::{build_report, BuildContext, BuildStats, Report};
pub use status::{CompletionStatuses, Light};
pub use taxonomy::{Taxonomy, TaxonomyConfig};
