//! Core project data structures and types.
//!
//! This module defines the records produced by the discovery pipeline and
//! persisted in the projects cache.

use std::{
    fmt::{Display, Formatter, Result},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Technology label assigned to a project by the classifier.
///
/// The set is closed. The serialized names are the human-readable labels
/// (`"Drupal 7"`, `"PHP"`, ...) so that cache files stay readable and stable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum ProjectType {
    /// Composer project requiring `drupal/core-recommended`
    Drupal,

    /// Composer project mentioning `laravel`
    Laravel,

    /// Any other project with a `composer.json`
    Composer,

    /// `package.json` mentioning `astro`
    Astro,

    /// `package.json` mentioning `react`
    React,

    /// Any other project with a `package.json`
    Node,

    /// Legacy Drupal site whose `index.php` defines `DRUPAL_ROOT`
    #[serde(rename = "Drupal 7")]
    Drupal7,

    /// Plain PHP project with an `index.php`
    #[serde(rename = "PHP")]
    Php,

    /// Go project with a `main.go`
    Go,

    /// Rust project with a `Cargo.toml`
    Rust,

    /// Python project with a `requirements.txt`
    Python,

    /// No marker file matched
    Unknown,
}

impl ProjectType {
    /// Every label, in classifier precedence order.
    pub const ALL: [Self; 12] = [
        Self::Drupal,
        Self::Laravel,
        Self::Composer,
        Self::Astro,
        Self::React,
        Self::Node,
        Self::Drupal7,
        Self::Php,
        Self::Go,
        Self::Rust,
        Self::Python,
        Self::Unknown,
    ];

    /// The user-facing label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Drupal => "Drupal",
            Self::Laravel => "Laravel",
            Self::Composer => "Composer",
            Self::Astro => "Astro",
            Self::React => "React",
            Self::Node => "Node",
            Self::Drupal7 => "Drupal 7",
            Self::Php => "PHP",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Python => "Python",
            Self::Unknown => "Unknown",
        }
    }
}

impl Display for ProjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// A discovered project.
///
/// Field names are serialized in `PascalCase` (`Name`, `ShortName`, `Path`,
/// `Type`, `IsDdev`), which is the on-disk cache format.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    /// Path relative to the projects root, or `.` for the root itself
    pub name: String,

    /// Final path segment of the project directory
    pub short_name: String,

    /// Absolute path of the project directory
    pub path: PathBuf,

    /// Classifier-assigned technology label
    #[serde(rename = "Type")]
    pub kind: ProjectType,

    /// Whether the project carries a `.ddev/` local environment directory
    #[serde(default)]
    pub is_ddev: bool,
}

impl Project {
    /// Build a project record for `path`, discovered under `root`.
    ///
    /// `name` is the path relative to `root`. Paths that are not under `root`
    /// keep their full display form; the root itself is named `.`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use std::path::Path;
    /// # use gool::project::{Project, ProjectType};
    /// let project = Project::new(
    ///     Path::new("/work"),
    ///     Path::new("/work/clients/acme"),
    ///     ProjectType::Laravel,
    ///     false,
    /// );
    /// assert_eq!(project.name, "clients/acme");
    /// assert_eq!(project.short_name, "acme");
    /// ```
    #[must_use]
    pub fn new(root: &Path, path: &Path, kind: ProjectType, is_ddev: bool) -> Self {
        Self {
            name: relative_name(root, path),
            short_name: path.file_name().map_or_else(
                || path.display().to_string(),
                |n| n.to_string_lossy().into_owned(),
            ),
            path: path.to_path_buf(),
            kind,
            is_ddev,
        }
    }

    /// Whether this record was built for `root`: its path lies under `root`
    /// and its name is relative to it.
    #[must_use]
    pub fn belongs_to(&self, root: &Path) -> bool {
        self.path.starts_with(root) && self.name == relative_name(root, &self.path)
    }
}

/// Compute the display name of `path` relative to `root`.
fn relative_name(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => path.display().to_string(),
    }
}

impl Display for Project {
    /// Format the project as `<name> [<type>]`, with a `ddev` tag when set.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} [{}]", self.name, self.kind)?;
        if self.is_ddev {
            write!(f, " (ddev)")?;
        }
        Ok(())
    }
}
