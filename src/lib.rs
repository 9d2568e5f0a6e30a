//! # gool
//!
//! Discover the IDE projects living under a root directory, label each one
//! with its technology stack and cache the result for fast listing.
//!
//! The pipeline is [`scanner`] → [`classifier`] → [`catalog`], with
//! [`cache`] persisting the catalog between runs.

pub mod cache;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod filtering;
pub mod output;
pub mod project;
pub mod scanner;

pub use catalog::{Catalog, CatalogBuilder, CatalogSource};
pub use config::{FileConfig, ScanOptions};
