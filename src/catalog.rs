//! Project catalog assembly.
//!
//! The [`CatalogBuilder`] ties the pipeline together: it serves the cached
//! catalog when one is usable, and otherwise scans the projects root,
//! classifies every discovered directory and writes the fresh catalog back to
//! the cache. The cache is never checked for freshness; callers ask for a
//! rescan explicitly.

use std::path::PathBuf;

use crate::{
    cache::{CacheStore, PROJECTS_CACHE},
    classifier::classify_with_warnings,
    config::ScanOptions,
    project::{Project, Projects},
    scanner::Scanner,
};

/// Directory whose presence marks a ddev local environment.
pub const DDEV_DIR: &str = ".ddev";

/// Where a catalog came from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CatalogSource {
    /// Deserialized from the cache without touching the projects root
    Cache,

    /// Built by walking the projects root
    Scan,
}

/// A project catalog together with the problems met while producing it.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// The projects, in walk order
    pub projects: Projects,

    /// How the catalog was obtained
    pub source: CatalogSource,

    /// Non-fatal problems: unreadable entries, unreadable marker files and
    /// cache read or write failures
    pub warnings: Vec<String>,
}

impl Catalog {
    /// Whether any non-fatal problem was recorded.
    ///
    /// A partial scan may be missing projects below unreadable directories.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Builds project catalogs for one projects root.
#[derive(Debug)]
pub struct CatalogBuilder {
    /// Directory scanned for projects
    root: PathBuf,

    /// Scanner used on cache misses
    scanner: Scanner,

    /// Cache the catalog is read from and written to
    cache: CacheStore,
}

impl CatalogBuilder {
    /// Create a builder for `root`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use gool::{cache::CacheStore, catalog::CatalogBuilder, config::ScanOptions};
    /// let builder = CatalogBuilder::new(
    ///     "/home/me/Projects",
    ///     ScanOptions::default(),
    ///     CacheStore::new("/tmp/gool-cache"),
    /// );
    /// let catalog = builder.get_projects(true);
    /// ```
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, scan_options: ScanOptions, cache: CacheStore) -> Self {
        Self {
            root: root.into(),
            scanner: Scanner::new(scan_options),
            cache,
        }
    }

    /// Enable or disable the scanner's progress spinner.
    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.scanner = self.scanner.with_quiet(quiet);
        self
    }

    /// Return the project catalog.
    ///
    /// With `use_cache`, a readable cached catalog built for this root is
    /// returned as is. Any other case (no cache entry, a corrupt one, one
    /// written for another root, or `use_cache == false`) triggers
    /// [`CatalogBuilder::build`].
    #[must_use]
    pub fn get_projects(&self, use_cache: bool) -> Catalog {
        let mut warnings = Vec::new();

        if use_cache {
            match self.cache.load::<Vec<Project>>(PROJECTS_CACHE) {
                Ok(Some(projects)) if self.is_catalog_of_root(&projects) => {
                    return Catalog {
                        projects: projects.into(),
                        source: CatalogSource::Cache,
                        warnings,
                    };
                }
                Ok(_) => {}
                Err(e) => warnings.push(format!("Ignoring unusable cache: {e:#}")),
            }
        }

        let mut catalog = self.build();
        warnings.append(&mut catalog.warnings);
        catalog.warnings = warnings;
        catalog
    }

    /// Whether a cached catalog was built for this builder's root.
    ///
    /// The cache holds one catalog whatever the root, so it is only usable
    /// when every record lies under the root with a name relative to it. An
    /// empty catalog cannot be attributed to any root.
    fn is_catalog_of_root(&self, projects: &[Project]) -> bool {
        !projects.is_empty() && projects.iter().all(|p| p.belongs_to(&self.root))
    }

    /// Scan, classify and persist a fresh catalog.
    ///
    /// A cache write failure is recorded as a warning; the fresh catalog is
    /// returned either way.
    #[must_use]
    pub fn build(&self) -> Catalog {
        let report = self.scanner.discover_project_dirs(&self.root);
        let mut warnings = report.errors;

        let projects: Vec<Project> = report
            .dirs
            .iter()
            .map(|dir| {
                let kind = classify_with_warnings(dir, &mut warnings);
                let is_ddev = dir.join(DDEV_DIR).exists();
                Project::new(&self.root, dir, kind, is_ddev)
            })
            .collect();

        if let Err(e) = self.cache.save(PROJECTS_CACHE, projects.as_slice()) {
            warnings.push(format!("Could not update cache: {e:#}"));
        }

        Catalog {
            projects: projects.into(),
            source: CatalogSource::Scan,
            warnings,
        }
    }
}
