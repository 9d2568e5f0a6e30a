//! Command-line interface definition and argument parsing.
//!
//! This module defines the actions and options of the `gool` binary using
//! [clap](https://docs.rs/clap/). Helper methods on [`Cli`] accept a
//! [`FileConfig`] reference so that config-file values act as defaults that CLI
//! arguments can override (layered config).

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};

use gool::config::file::{FileConfig, expand_tilde};
use gool::config::{ProjectFilter, ScanOptions, SortCriteria, SortOptions};

/// Options of the `ls` action.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct LsArgs {
    /// Ignore the cached catalog and rescan the projects root
    ///
    /// The fresh catalog replaces the cached one.
    #[arg(long)]
    no_cache: bool,

    /// Only list projects of this type
    #[arg(short = 't', long = "type", value_enum)]
    project_type: Option<ProjectFilter>,

    /// Sort the listing instead of keeping walk order
    #[arg(long, value_enum)]
    sort: Option<SortCriteria>,

    /// Reverse the sort order
    #[arg(long)]
    reverse: bool,

    /// Output the listing as a single JSON document
    #[arg(long)]
    json: bool,

    /// Print a per-type summary to stderr after the listing
    #[arg(long)]
    summary: bool,
}

impl LsArgs {
    /// Whether a cached catalog may be served.
    #[must_use]
    pub const fn use_cache(&self) -> bool {
        !self.no_cache
    }

    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Whether `--summary` was passed.
    #[must_use]
    pub const fn summary(&self) -> bool {
        self.summary
    }

    /// The type filter, `All` when not given.
    #[must_use]
    pub fn project_filter(&self) -> ProjectFilter {
        self.project_type.unwrap_or_default()
    }

    /// The requested listing order.
    #[must_use]
    pub const fn sort_options(&self) -> SortOptions {
        SortOptions {
            criteria: self.sort,
            reverse: self.reverse,
        }
    }
}

/// Top-level actions.
#[derive(Subcommand, Debug)]
pub enum Action {
    /// List the discovered projects (served from cache when available)
    Ls(LsArgs),

    /// Switch to a project directory (not implemented yet)
    Cd,

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Inspect or clear the project cache
    Cache {
        #[command(subcommand)]
        command: CacheCommand,
    },
}

impl Action {
    /// Whether the action needs the config file loaded first.
    ///
    /// `config` and `cache` only deal with file locations, so they keep
    /// working when the config file is malformed.
    #[must_use]
    pub const fn reads_config(&self) -> bool {
        matches!(self, Self::Ls(_) | Self::Cd)
    }
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write an empty config.json if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Subcommands for `cache`.
#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Print the path to the project cache file
    Path,
    /// Delete the project cache so the next `ls` rescans
    Clear,
}

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "gool")]
#[command(about = "Find IDE projects under a root directory and list them by stack")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Action to run
    #[command(subcommand)]
    pub action: Action,

    /// Projects root to scan (overrides `ProjectsRootDir` from the config file)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Report scan and cache warnings
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Directory names to skip while scanning (repeatable)
    #[arg(long, global = true, action = clap::ArgAction::Append)]
    skip: Vec<PathBuf>,

    /// Maximum directory depth to scan
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Descend into symlinked directories while scanning
    #[arg(long, global = true)]
    follow_links: bool,
}

impl Cli {
    /// Resolve the projects root.
    ///
    /// Priority: `--root` > config file `ProjectsRootDir`. Tilde expansion is
    /// applied to both.
    ///
    /// # Errors
    ///
    /// Returns an error when neither source provides a non-empty root.
    pub fn projects_root(&self, config: &FileConfig) -> Result<PathBuf> {
        if let Some(root) = &self.root {
            return Ok(expand_tilde(root));
        }

        config.projects_root().ok_or_else(|| {
            anyhow!(
                "No projects root configured. Set \"ProjectsRootDir\" in {} or pass --root",
                FileConfig::config_path()
                    .map_or_else(|| "the config file".to_string(), |p| p.display().to_string())
            )
        })
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **skip**: merged from both sources (config values first, then CLI)
    /// - **`max_depth`**: CLI > config > unlimited
    /// - **`follow_links`**: CLI flag `||` config value
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let mut skip = config.skip.clone().unwrap_or_default();
        skip.extend(self.skip.iter().cloned());

        ScanOptions {
            skip,
            max_depth: self.max_depth.or(config.max_depth),
            follow_links: self.follow_links || config.follow_links.unwrap_or(false),
        }
    }

    /// Whether warnings should be reported: CLI flag `||` config value.
    #[must_use]
    pub fn verbose(&self, config: &FileConfig) -> bool {
        self.verbose || config.verbose.unwrap_or(false)
    }
}
