//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how the projects root is
//! walked.

use std::path::PathBuf;

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Directory names never descended into
    pub skip: Vec<PathBuf>,

    /// Maximum directory depth to scan (None = unlimited)
    pub max_depth: Option<usize>,

    /// Descend into symlinked directories. Dangling links and link loops
    /// are then reported as walk errors.
    pub follow_links: bool,
}
