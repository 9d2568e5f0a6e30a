//! Filtering and sorting configuration for the project listing.
//!
//! This module defines the type filter and the sorting criteria that decide
//! which catalog entries `ls` shows and in what order.

use clap::ValueEnum;

use crate::project::ProjectType;

/// Restricts the listing to one project type.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum ProjectFilter {
    /// Include every project
    #[default]
    All,

    /// Drupal (composer with `drupal/core-recommended`)
    Drupal,

    /// Laravel
    Laravel,

    /// Other Composer projects
    Composer,

    /// Astro
    Astro,

    /// React
    React,

    /// Other Node.js projects
    Node,

    /// Drupal 7 (`index.php` with `DRUPAL_ROOT`)
    #[value(name = "drupal7")]
    Drupal7,

    /// Plain PHP
    Php,

    /// Go
    Go,

    /// Rust
    Rust,

    /// Python
    Python,

    /// Projects no marker file matched
    Unknown,
}

impl ProjectFilter {
    /// Whether a project of type `kind` passes this filter.
    #[must_use]
    pub const fn matches(self, kind: ProjectType) -> bool {
        match self {
            Self::All => true,
            Self::Drupal => matches!(kind, ProjectType::Drupal),
            Self::Laravel => matches!(kind, ProjectType::Laravel),
            Self::Composer => matches!(kind, ProjectType::Composer),
            Self::Astro => matches!(kind, ProjectType::Astro),
            Self::React => matches!(kind, ProjectType::React),
            Self::Node => matches!(kind, ProjectType::Node),
            Self::Drupal7 => matches!(kind, ProjectType::Drupal7),
            Self::Php => matches!(kind, ProjectType::Php),
            Self::Go => matches!(kind, ProjectType::Go),
            Self::Rust => matches!(kind, ProjectType::Rust),
            Self::Python => matches!(kind, ProjectType::Python),
            Self::Unknown => matches!(kind, ProjectType::Unknown),
        }
    }
}

/// Enumeration of supported sorting criteria for the listing.
///
/// - `Name`: alphabetical by relative name, case-insensitive
/// - `Type`: grouped by type label alphabetically
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum SortCriteria {
    /// Sort by project name (A-Z by default)
    Name,

    /// Sort by type label
    Type,
}

/// Configuration for listing order.
///
/// When `criteria` is `None`, projects are displayed in walk order.
#[derive(Clone, Debug, Default)]
pub struct SortOptions {
    /// The sorting criterion to apply, or `None` to preserve walk order
    pub criteria: Option<SortCriteria>,

    /// Whether to reverse the sort order
    pub reverse: bool,
}
