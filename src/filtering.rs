//! Project filtering and ordering for the listing.

use crate::config::{ProjectFilter, SortCriteria, SortOptions};
use crate::project::Project;

/// Keep only the projects matching `filter`, preserving their order.
///
/// # Examples
///
/// ```no_run
/// # use gool::{filtering::filter_projects, config::ProjectFilter, project::Project};
/// # fn example(projects: Vec<Project>) {
/// let drupal_sites = filter_projects(projects, ProjectFilter::Drupal);
/// # }
/// ```
#[must_use]
pub fn filter_projects(projects: Vec<Project>, filter: ProjectFilter) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|project| filter.matches(project.kind))
        .collect()
}

/// Sort projects in place according to the given sorting options.
///
/// When `sort_opts.criteria` is `None`, the walk order is kept. Sorts are
/// stable:
/// - `Name`: case-insensitive relative name
/// - `Type`: type label alphabetically, then name
///
/// Setting `sort_opts.reverse` to `true` flips the resulting order.
pub fn sort_projects(projects: &mut [Project], sort_opts: &SortOptions) {
    let Some(criteria) = sort_opts.criteria else {
        return;
    };

    match criteria {
        SortCriteria::Name => {
            projects.sort_by_cached_key(|p| p.name.to_lowercase());
        }
        SortCriteria::Type => {
            projects.sort_by_cached_key(|p| (p.kind.label(), p.name.to_lowercase()));
        }
    }

    if sort_opts.reverse {
        projects.reverse();
    }
}
