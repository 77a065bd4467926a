// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shows the client/project mapping in effect.

use serde::Serialize;

use pb_core::Taxonomy;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct TaxonomyJson<'a> {
    clients: Vec<ClientJson<'a>>,
    issue_query: String,
}

#[derive(Debug, Serialize)]
struct ClientJson<'a> {
    name: &'a str,
    color: &'a str,
    projects: Vec<ProjectJson<'a>>,
}

#[derive(Debug, Serialize)]
struct ProjectJson<'a> {
    name: &'a str,
    time_labels: Vec<&'a str>,
}

pub fn run(config: &Config, output: OutputFormat, query: bool) -> Result<()> {
    let taxonomy = config.taxonomy()?;
    if query {
        println!("{}", taxonomy.issue_query());
        return Ok(());
    }
    match output {
        OutputFormat::Text => print!("{}", render_text(&taxonomy)),
        OutputFormat::Json => println!("{}", render_json(&taxonomy)?),
    }
    Ok(())
}

pub(crate) fn render_text(taxonomy: &Taxonomy) -> String {
    let mut out = String::new();
    for client in taxonomy.clients() {
        out.push_str(&format!("{} ({})\n", client, taxonomy.color_of(client)));
        for project in taxonomy.projects_of(client) {
            out.push_str(&format!("  {}\n", project));
            for label in taxonomy.labels_of(project) {
                out.push_str(&format!("    <- {}\n", label));
            }
        }
    }
    out
}

pub(crate) fn render_json(taxonomy: &Taxonomy) -> Result<String> {
    let clients = taxonomy
        .clients()
        .map(|client| ClientJson {
            name: client,
            color: taxonomy.color_of(client),
            projects: taxonomy
                .projects_of(client)
                .iter()
                .map(|project| ProjectJson {
                    name: project,
                    time_labels: taxonomy.labels_of(project),
                })
                .collect(),
        })
        .collect();
    let doc = TaxonomyJson {
        clients,
        issue_query: taxonomy.issue_query(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;
