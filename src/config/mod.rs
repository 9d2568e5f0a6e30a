//! Configuration types and options for the application.
//!
//! This module contains the configuration file model plus the scanning,
//! filtering and sorting options derived from it and from the CLI.

pub mod file;
pub mod filter;
pub mod scan;

pub use file::FileConfig;
pub use filter::{ProjectFilter, SortCriteria, SortOptions};
pub use scan::ScanOptions;
