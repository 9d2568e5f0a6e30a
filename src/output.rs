//! Structured JSON output for scripting and piping.
//!
//! When `ls --json` is passed, the listing is replaced by a single JSON
//! document built from these structures.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    catalog::{Catalog, CatalogSource},
    project::{Project, ProjectType},
};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// `"cache"` or `"scan"`.
    pub source: &'static str,

    /// Projects that passed the listing filter, in display order.
    pub projects: Vec<JsonProjectEntry>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,

    /// Non-fatal problems met while producing the catalog.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// A single project entry in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonProjectEntry {
    /// Path relative to the projects root.
    pub name: String,

    /// Final path segment.
    pub short_name: String,

    /// Absolute path of the project directory.
    pub path: String,

    /// Type label (`"Drupal 7"`, `"React"`, ...).
    #[serde(rename = "type")]
    pub project_type: ProjectType,

    /// Whether a `.ddev/` directory is present.
    pub is_ddev: bool,
}

/// Aggregated summary across the listed projects.
#[derive(Serialize, Debug)]
pub struct JsonSummary {
    /// Number of listed projects.
    pub total_projects: usize,

    /// Per-type count (key is the type label).
    pub by_type: BTreeMap<String, usize>,
}

impl JsonOutput {
    /// Build the JSON document for `projects`, taken from `catalog`.
    ///
    /// `projects` is passed separately because the listing may be filtered
    /// or sorted.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, projects: &[Project]) -> Self {
        let mut by_type = BTreeMap::new();
        for project in projects {
            *by_type.entry(project.kind.label().to_string()).or_insert(0) += 1;
        }

        Self {
            source: match catalog.source {
                CatalogSource::Cache => "cache",
                CatalogSource::Scan => "scan",
            },
            projects: projects.iter().map(JsonProjectEntry::from).collect(),
            summary: JsonSummary {
                total_projects: projects.len(),
                by_type,
            },
            warnings: catalog.warnings.clone(),
        }
    }
}

impl From<&Project> for JsonProjectEntry {
    fn from(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            short_name: project.short_name.clone(),
            path: project.path.display().to_string(),
            project_type: project.kind,
            is_ddev: project.is_ddev,
        }
    }
}
