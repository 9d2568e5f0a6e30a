//! Technology classification from marker files.
//!
//! A project is labelled by an ordered chain of detectors. Each detector looks
//! for one marker file and, when present, may peek at its raw contents for a
//! distinguishing substring. The first detector whose marker exists decides
//! the label; later detectors are never consulted. This is a cheap heuristic,
//! not a manifest parser.

use std::{fs, path::Path};

use crate::project::ProjectType;

/// Infer the technology label of `project_dir`.
///
/// Read failures on an existing marker fall back to that marker's generic
/// label. Use [`classify_with_warnings`] to collect those failures.
///
/// # Examples
///
/// ```no_run
/// # use std::path::Path;
/// # use gool::{classifier::classify, project::ProjectType};
/// let kind = classify(Path::new("/home/me/Projects/blog"));
/// println!("{kind}");
/// ```
#[must_use]
pub fn classify(project_dir: &Path) -> ProjectType {
    classify_with_warnings(project_dir, &mut Vec::new())
}

/// Same as [`classify`], recording marker read failures in `warnings`.
///
/// # Detection Order
///
/// 1. `composer.json`: `Drupal` if it mentions `drupal/core-recommended`,
///    `Laravel` if it mentions `laravel`, otherwise `Composer`
/// 2. `package.json`: `Astro` if it mentions `astro`, `React` if it mentions
///    `react`, otherwise `Node`
/// 3. `index.php`: `Drupal 7` if it mentions `DRUPAL_ROOT`, otherwise `PHP`
/// 4. `main.go`: `Go`
/// 5. `Cargo.toml`: `Rust`
/// 6. `requirements.txt`: `Python`
/// 7. otherwise `Unknown`
pub fn classify_with_warnings(project_dir: &Path, warnings: &mut Vec<String>) -> ProjectType {
    detect_composer(project_dir, warnings)
        .or_else(|| detect_package_json(project_dir, warnings))
        .or_else(|| detect_index_php(project_dir, warnings))
        .or_else(|| detect_marker(project_dir, "main.go", ProjectType::Go))
        .or_else(|| detect_marker(project_dir, "Cargo.toml", ProjectType::Rust))
        .or_else(|| detect_marker(project_dir, "requirements.txt", ProjectType::Python))
        .unwrap_or(ProjectType::Unknown)
}

fn detect_composer(dir: &Path, warnings: &mut Vec<String>) -> Option<ProjectType> {
    detect_by_content(
        dir,
        "composer.json",
        &[
            ("drupal/core-recommended", ProjectType::Drupal),
            ("laravel", ProjectType::Laravel),
        ],
        ProjectType::Composer,
        warnings,
    )
}

fn detect_package_json(dir: &Path, warnings: &mut Vec<String>) -> Option<ProjectType> {
    detect_by_content(
        dir,
        "package.json",
        &[("astro", ProjectType::Astro), ("react", ProjectType::React)],
        ProjectType::Node,
        warnings,
    )
}

fn detect_index_php(dir: &Path, warnings: &mut Vec<String>) -> Option<ProjectType> {
    detect_by_content(
        dir,
        "index.php",
        &[("DRUPAL_ROOT", ProjectType::Drupal7)],
        ProjectType::Php,
        warnings,
    )
}

/// Presence-only detector.
fn detect_marker(dir: &Path, marker: &str, kind: ProjectType) -> Option<ProjectType> {
    dir.join(marker).exists().then_some(kind)
}

/// Detector for a marker whose contents refine the label.
///
/// Returns `None` when the marker is absent. Otherwise returns the label of
/// the first needle found in the file, or `fallback`. Needles are matched
/// case-sensitively on the raw bytes.
fn detect_by_content(
    dir: &Path,
    marker: &str,
    needles: &[(&str, ProjectType)],
    fallback: ProjectType,
    warnings: &mut Vec<String>,
) -> Option<ProjectType> {
    let path = dir.join(marker);
    if !path.exists() {
        return None;
    }

    let Some(content) = read_marker(&path, warnings) else {
        return Some(fallback);
    };

    let kind = needles
        .iter()
        .find(|(needle, _)| content.contains(*needle))
        .map_or(fallback, |(_, kind)| *kind);

    Some(kind)
}

/// Read a marker file as text, lossily decoding invalid UTF-8.
fn read_marker(path: &Path, warnings: &mut Vec<String>) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            warnings.push(format!("Error reading {}: {e}", path.display()));
            None
        }
    }
}
