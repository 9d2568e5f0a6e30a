//! Collection management and presentation for discovered projects.
//!
//! This module provides the `Projects` struct which wraps a catalog of
//! projects and renders it for the `ls` action.

use std::io::{self, Write};

use colored::Colorize;

use crate::project::ProjectType;

use super::Project;

/// Separator line printed after every project block in the listing.
pub const LISTING_SEPARATOR: &str = "***";

/// An ordered collection of discovered projects.
///
/// Order is the filesystem walk order unless the caller sorts it explicitly.
#[derive(Debug, Clone, Default)]
pub struct Projects(Vec<Project>);

impl From<Vec<Project>> for Projects {
    fn from(projects: Vec<Project>) -> Self {
        Self(projects)
    }
}

impl Projects {
    /// Get the number of projects in the collection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return a slice of the underlying project collection.
    #[must_use]
    pub fn as_slice(&self) -> &[Project] {
        &self.0
    }

    /// Count the projects of each type, in classifier precedence order.
    ///
    /// Types with no project are omitted.
    #[must_use]
    pub fn count_by_type(&self) -> Vec<(ProjectType, usize)> {
        ProjectType::ALL
            .into_iter()
            .map(|kind| (kind, self.0.iter().filter(|p| p.kind == kind).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Write the plain listing: one block per project made of the name, the
    /// type label and a [`LISTING_SEPARATOR`] line.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    ///
    /// # Output Format
    ///
    /// ```text
    /// clients/acme
    /// Laravel
    /// ***
    /// blog
    /// Astro
    /// ***
    /// ```
    pub fn write_listing(&self, out: &mut impl Write) -> io::Result<()> {
        for project in &self.0 {
            writeln!(out, "{}", project.name)?;
            writeln!(out, "{}", project.kind)?;
            writeln!(out, "{LISTING_SEPARATOR}")?;
        }
        Ok(())
    }

    /// Print the listing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written (e.g. a closed pipe).
    pub fn print_listing(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_listing(&mut lock)
    }

    /// Print a colored per-type summary to stderr.
    ///
    /// Goes to stderr so that piping the listing stays clean.
    ///
    /// # Output Format
    ///
    /// ```text
    ///   🐘 2 Laravel
    ///   ⚛️ 1 React
    ///   📁 3 projects total
    /// ```
    pub fn print_summary(&self) {
        for (kind, count) in self.count_by_type() {
            eprintln!(
                "  {} {} {kind}",
                icon_for_project_type(kind),
                count.to_string().bright_white()
            );
        }

        eprintln!(
            "  📁 {} projects total",
            self.len().to_string().bright_green().bold()
        );
    }
}

/// Return the icon for a given project type.
const fn icon_for_project_type(kind: ProjectType) -> &'static str {
    match kind {
        ProjectType::Drupal | ProjectType::Drupal7 => "💧",
        ProjectType::Laravel | ProjectType::Composer | ProjectType::Php => "🐘",
        ProjectType::Astro => "🚀",
        ProjectType::React => "⚛️",
        ProjectType::Node => "📦",
        ProjectType::Go => "🐹",
        ProjectType::Rust => "🦀",
        ProjectType::Python => "🐍",
        ProjectType::Unknown => "❔",
    }
}
