// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static client/project taxonomy.
//!
//! Maps issue-tracker projects to the client that owns them, and
//! time-tracking labels to issue-tracker projects. A [`Taxonomy`] is built
//! once from a [`TaxonomyConfig`] and shared by reference; it never changes
//! during a run.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Color used for clients without an entry in the color table.
pub const DEFAULT_COLOR: &str = "#667eea";

/// Serializable taxonomy table, as stored in configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Clients keyed by display name.
    #[serde(default)]
    pub clients: BTreeMap<String, ClientConfig>,
    /// Time-tracking label -> issue-tracker project.
    #[serde(default)]
    pub time_tracking: BTreeMap<String, String>,
}

/// One client's display metadata and owned projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Display color (CSS hex). Falls back to [`DEFAULT_COLOR`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Issue-tracker projects owned by this client.
    #[serde(default)]
    pub projects: Vec<String>,
}

const BUILTIN_CLIENTS: &[(&str, &str, &[&str])] = &[
    (
        "Transener",
        "#6366f1",
        &[
            "TRANSENER TESLA",
            "TRANSENER Costeo Emplazamiento",
            "TRANSENER Mantenimiento",
        ],
    ),
    (
        "SACDE",
        "#f59e0b",
        &[
            "SACDE - Francos",
            "SACDE - Equipos",
            "SACDE - Partes Diarios",
            "SACDE APP MATERIALES",
            "SACDE Mantenimiento",
            "SACDE PORTAL",
        ],
    ),
    ("Bayer", "#3b82f6", &["Bayer"]),
    ("Pampa Energia", "#10b981", &["PAMPA Almacenes Mejoras"]),
];

const BUILTIN_TIME_TRACKING: &[(&str, &str)] = &[
    ("Tesla", "TRANSENER TESLA"),
    ("Costeo de Emplazamiento", "TRANSENER Costeo Emplazamiento"),
    ("Migración S4", "TRANSENER Mantenimiento"),
    ("Interface de Francos Compensatorios", "TRANSENER Mantenimiento"),
    ("Trello", "TRANSENER Mantenimiento"),
    ("Premios", "TRANSENER Mantenimiento"),
    ("Paquete 4 ''Francos APK''", "SACDE - Francos"),
    ("Portal de Proveedores FASE 1", "SACDE PORTAL"),
    ("Portal de Proveedores FASE 2", "SACDE PORTAL"),
    ("Auditoria Seguridad", "SACDE Mantenimiento"),
    ("Soporte", "SACDE Mantenimiento"),
    ("Consultoria FICO", "SACDE Mantenimiento"),
    ("App Facilites", "Bayer"),
    ("Mejoras Solped", "Bayer"),
    ("Mejoras App Almacenes- Fase 2", "PAMPA Almacenes Mejoras"),
];

impl TaxonomyConfig {
    /// The table shipped with the tool, used when no configuration exists.
    pub fn builtin() -> Self {
        let clients = BUILTIN_CLIENTS
            .iter()
            .map(|(name, color, projects)| {
                (
                    name.to_string(),
                    ClientConfig {
                        color: Some(color.to_string()),
                        projects: projects.iter().map(|p| p.to_string()).collect(),
                    },
                )
            })
            .collect();
        let time_tracking = BUILTIN_TIME_TRACKING
            .iter()
            .map(|(label, project)| (label.to_string(), project.to_string()))
            .collect();
        TaxonomyConfig {
            clients,
            time_tracking,
        }
    }
}

/// Immutable lookup structure over a [`TaxonomyConfig`].
#[derive(Debug, Clone)]
pub struct Taxonomy {
    client_projects: BTreeMap<String, Vec<String>>,
    project_client: HashMap<String, String>,
    label_project: HashMap<String, String>,
    colors: HashMap<String, String>,
    default_color: String,
}

impl Taxonomy {
    /// Builds the lookup tables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingMapping`] if a project is listed under two
    /// different clients.
    pub fn from_config(config: &TaxonomyConfig) -> Result<Self> {
        let mut client_projects = BTreeMap::new();
        let mut project_client: HashMap<String, String> = HashMap::new();
        let mut colors = HashMap::new();

        for (client, entry) in &config.clients {
            let mut projects: Vec<String> = Vec::with_capacity(entry.projects.len());
            for project in &entry.projects {
                if let Some(owner) = project_client.get(project) {
                    if owner != client {
                        return Err(Error::ConflictingMapping {
                            project: project.clone(),
                            first: owner.clone(),
                            second: client.clone(),
                        });
                    }
                    continue;
                }
                project_client.insert(project.clone(), client.clone());
                projects.push(project.clone());
            }
            if let Some(color) = &entry.color {
                colors.insert(client.clone(), color.clone());
            }
            client_projects.insert(client.clone(), projects);
        }

        let label_project = config
            .time_tracking
            .iter()
            .map(|(label, project)| (label.clone(), project.clone()))
            .collect();

        Ok(Taxonomy {
            client_projects,
            project_client,
            label_project,
            colors,
            default_color: DEFAULT_COLOR.to_string(),
        })
    }

    /// The built-in table. Infallible: the shipped table has no conflicts.
    pub fn builtin() -> Self {
        match Self::from_config(&TaxonomyConfig::builtin()) {
            Ok(taxonomy) => taxonomy,
            Err(_) => unreachable!("builtin taxonomy has no conflicting projects"),
        }
    }

    /// Overrides the color used for clients without one.
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    /// Client owning an issue-tracker project.
    pub fn client_of(&self, project: &str) -> Option<&str> {
        self.project_client.get(project).map(String::as_str)
    }

    /// Issue-tracker project a time-tracking label maps to.
    pub fn issue_project_of(&self, label: &str) -> Option<&str> {
        self.label_project.get(label).map(String::as_str)
    }

    /// Display color for a client.
    pub fn color_of(&self, client: &str) -> &str {
        self.colors
            .get(client)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }

    /// Known client names, sorted.
    pub fn clients(&self) -> impl Iterator<Item = &str> {
        self.client_projects.keys().map(String::as_str)
    }

    /// Projects owned by a client, in configuration order.
    pub fn projects_of(&self, client: &str) -> &[String] {
        self.client_projects
            .get(client)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Time-tracking labels that map onto a project, sorted.
    pub fn labels_of(&self, project: &str) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .label_project
            .iter()
            .filter(|(_, p)| p.as_str() == project)
            .map(|(l, _)| l.as_str())
            .collect();
        labels.sort_unstable();
        labels
    }

    /// Default issue-tracker query selecting every mapped project.
    pub fn issue_query(&self) -> String {
        let projects: Vec<&str> = self
            .client_projects
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        format!(
            "project in (\"{}\") ORDER BY created DESC",
            projects.join("\",\"")
        )
    }
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;
