//! Project records and collections.
//!
//! ## Main Parts
//!
//! - [`Project`] - A discovered project and its classification
//! - [`ProjectType`] - The closed set of technology labels
//! - [`Projects`] - An ordered catalog of projects with listing helpers

#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for project records
pub mod project;
pub mod projects;

pub use project::{Project, ProjectType};
pub use projects::Projects;
