//! Directory scanning and project boundary detection.
//!
//! This module walks the projects root and reports every directory that holds
//! a `.idea/` metadata directory. Discovered projects are not descended into,
//! so IDE folders nested inside a project never produce extra entries. The
//! scanner is purely structural: it never opens files.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::config::ScanOptions;

/// Name of the IDE metadata directory that marks a project root.
pub const PROJECT_MARKER_DIR: &str = ".idea";

/// Outcome of a directory walk.
///
/// `dirs` holds the discovered project directories in walk order. `errors`
/// holds one message per entry the walk could not read; when it is non-empty
/// the result is partial.
#[derive(Debug, Default, Clone)]
pub struct ScanReport {
    /// Discovered project directories
    pub dirs: Vec<PathBuf>,

    /// Errors met during the walk
    pub errors: Vec<String>,
}

impl ScanReport {
    /// Whether some part of the tree could not be walked.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Directory scanner for discovering IDE projects.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// When `true`, suppresses progress spinner output (used by `--json` mode).
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use gool::{config::ScanOptions, scanner::Scanner};
    /// let scanner = Scanner::new(ScanOptions::default());
    /// ```
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self {
            scan_options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Walk `root` and collect every project directory below it.
    ///
    /// The walk is pre-order, visiting siblings by file name. A directory
    /// containing a `.idea/` directory is reported and its subtree is pruned.
    /// Directories named in the skip list are pruned without being reported.
    ///
    /// Unreadable entries do not stop the walk; each one adds a message to
    /// [`ScanReport::errors`]. A root that does not exist therefore yields no
    /// directories and a single error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use std::path::Path;
    /// # use gool::{config::ScanOptions, scanner::Scanner};
    /// let report = Scanner::new(ScanOptions::default())
    ///     .discover_project_dirs(Path::new("/home/me/Projects"));
    /// println!("Found {} projects", report.dirs.len());
    /// ```
    #[must_use]
    pub fn discover_project_dirs(&self, root: &Path) -> ScanReport {
        let progress = self.progress_bar();
        let mut report = ScanReport::default();

        let mut walker = WalkDir::new(root)
            .follow_links(self.scan_options.follow_links)
            .sort_by_file_name();
        if let Some(depth) = self.scan_options.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut entries = walker.into_iter();
        while let Some(next) = entries.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(e) => {
                    report.errors.push(format!("Error scanning: {e}"));
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            if entry.depth() > 0 && self.is_path_in_skip_list(entry.path()) {
                entries.skip_current_dir();
                continue;
            }

            if Self::is_project_root(entry.path()) {
                report.dirs.push(entry.into_path());
                progress.set_message(format!("Scanning... {} found", report.dirs.len()));
                entries.skip_current_dir();
            }
        }

        progress.finish_and_clear();

        report
    }

    /// Check whether `dir` holds the `.idea/` marker directory.
    ///
    /// Symlinks named `.idea` do not count, matching what the walk itself
    /// would see.
    fn is_project_root(dir: &Path) -> bool {
        fs::symlink_metadata(dir.join(PROJECT_MARKER_DIR)).is_ok_and(|m| m.is_dir())
    }

    /// Check if the directory name is in the skip list.
    fn is_path_in_skip_list(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| {
            self.scan_options
                .skip
                .iter()
                .any(|skip| skip.as_os_str() == name)
        })
    }

    fn progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Scanning...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn quiet_scanner(scan_options: ScanOptions) -> Scanner {
        Scanner::new(scan_options).with_quiet(true)
    }

    /// Helper to create a file with content, ensuring parent dirs exist.
    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn mark_project(dir: &Path) {
        fs::create_dir_all(dir.join(PROJECT_MARKER_DIR)).unwrap();
    }

    #[test]
    fn test_is_project_root() {
        let tmp = TempDir::new().unwrap();
        assert!(!Scanner::is_project_root(tmp.path()));

        mark_project(tmp.path());
        assert!(Scanner::is_project_root(tmp.path()));
    }

    #[test]
    fn test_idea_file_is_not_a_marker() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join(".idea"), "not a directory");

        assert!(!Scanner::is_project_root(tmp.path()));
    }

    #[test]
    fn test_marker_name_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("p");
        fs::create_dir_all(project.join(".IDEA")).unwrap();

        // On case-insensitive filesystems `.IDEA` and `.idea` are the same
        // entry, so only assert where the distinction exists.
        if !project.join(".idea").exists() {
            let report = quiet_scanner(ScanOptions::default()).discover_project_dirs(tmp.path());
            assert!(report.dirs.is_empty());
        }
    }

    #[test]
    fn test_is_path_in_skip_list() {
        let scanner = quiet_scanner(ScanOptions {
            skip: vec![PathBuf::from("vendor"), PathBuf::from("node_modules")],
            max_depth: None,
            follow_links: false,
        });

        assert!(scanner.is_path_in_skip_list(Path::new("/r/a/vendor")));
        assert!(scanner.is_path_in_skip_list(Path::new("/r/node_modules")));
        assert!(!scanner.is_path_in_skip_list(Path::new("/r/vendor/pkg")));
        assert!(!scanner.is_path_in_skip_list(Path::new("/r/vendors")));
    }

    #[test]
    fn test_single_project_at_depth() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("a").join("b").join("c");
        mark_project(&project);
        create_file(&tmp.path().join("a").join("README.md"), "sibling file");
        create_file(&project.join("index.php"), "<?php");

        let report = quiet_scanner(ScanOptions::default()).discover_project_dirs(tmp.path());

        assert_eq!(report.dirs, vec![project]);
        assert!(!report.is_partial());
    }

    #[test]
    fn test_nested_marker_is_pruned() {
        let tmp = TempDir::new().unwrap();
        let outer = tmp.path().join("outer");
        mark_project(&outer);
        mark_project(&outer.join("packages").join("inner"));
        mark_project(&outer.join(PROJECT_MARKER_DIR).join("nested"));

        let report = quiet_scanner(ScanOptions::default()).discover_project_dirs(tmp.path());

        assert_eq!(report.dirs, vec![outer]);
    }

    #[test]
    fn test_root_itself_can_be_a_project() {
        let tmp = TempDir::new().unwrap();
        mark_project(tmp.path());
        mark_project(&tmp.path().join("child"));

        let report = quiet_scanner(ScanOptions::default()).discover_project_dirs(tmp.path());

        assert_eq!(report.dirs, vec![tmp.path().to_path_buf()]);
    }

    #[test]
    fn test_sibling_projects_are_all_found() {
        let tmp = TempDir::new().unwrap();
        mark_project(&tmp.path().join("one"));
        mark_project(&tmp.path().join("two"));
        mark_project(&tmp.path().join("group").join("three"));

        let mut dirs = quiet_scanner(ScanOptions::default())
            .discover_project_dirs(tmp.path())
            .dirs;
        dirs.sort();

        assert_eq!(
            dirs,
            vec![
                tmp.path().join("group").join("three"),
                tmp.path().join("one"),
                tmp.path().join("two"),
            ]
        );
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        let tmp = TempDir::new().unwrap();

        let report = quiet_scanner(ScanOptions::default()).discover_project_dirs(tmp.path());

        assert!(report.dirs.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_missing_root_reports_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");

        let report = quiet_scanner(ScanOptions::default()).discover_project_dirs(&missing);

        assert!(report.dirs.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert!(report.is_partial());
    }

    #[test]
    fn test_skip_list_prunes_directories() {
        let tmp = TempDir::new().unwrap();
        mark_project(&tmp.path().join("keep"));
        mark_project(&tmp.path().join("vendor").join("lib"));

        let report = quiet_scanner(ScanOptions {
            skip: vec![PathBuf::from("vendor")],
            max_depth: None,
            follow_links: false,
        })
        .discover_project_dirs(tmp.path());

        assert_eq!(report.dirs, vec![tmp.path().join("keep")]);
    }

    #[test]
    fn test_skip_list_does_not_apply_to_root() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("vendor");
        mark_project(&root.join("pkg"));

        let report = quiet_scanner(ScanOptions {
            skip: vec![PathBuf::from("vendor")],
            max_depth: None,
            follow_links: false,
        })
        .discover_project_dirs(&root);

        assert_eq!(report.dirs, vec![root.join("pkg")]);
    }

    #[test]
    fn test_max_depth_limits_discovery() {
        let tmp = TempDir::new().unwrap();
        mark_project(&tmp.path().join("shallow"));
        mark_project(&tmp.path().join("a").join("b").join("deep"));

        let report = quiet_scanner(ScanOptions {
            skip: vec![],
            max_depth: Some(1),
            follow_links: false,
        })
        .discover_project_dirs(tmp.path());

        assert_eq!(report.dirs, vec![tmp.path().join("shallow")]);
    }

    #[test]
    fn test_scan_directory_with_spaces_and_unicode() {
        let tmp = TempDir::new().unwrap();
        let spaced = tmp.path().join("path with spaces").join("my project");
        let unicode = tmp.path().join("プロジェクト");
        mark_project(&spaced);
        mark_project(&unicode);

        let report = quiet_scanner(ScanOptions::default()).discover_project_dirs(tmp.path());

        assert_eq!(report.dirs.len(), 2);
        assert!(report.dirs.contains(&spaced));
        assert!(report.dirs.contains(&unicode));
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_directory_is_reported_and_walk_continues() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        mark_project(&tmp.path().join("visible"));
        let locked = tmp.path().join("locked");
        mark_project(&locked.join("hidden-project"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can read the directory anyway.
        let readable = fs::read_dir(&locked).is_ok();

        let report = quiet_scanner(ScanOptions::default()).discover_project_dirs(tmp.path());

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(report.dirs.contains(&tmp.path().join("visible")));
        if !readable {
            assert!(report.is_partial());
            assert!(!report.dirs.contains(&locked.join("hidden-project")));
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_walk_error_does_not_hide_siblings() {
        let tmp = TempDir::new().unwrap();
        mark_project(&tmp.path().join("a-first"));
        std::os::unix::fs::symlink(tmp.path().join("nowhere"), tmp.path().join("m-dangling"))
            .unwrap();
        mark_project(&tmp.path().join("z-last"));

        let report = quiet_scanner(ScanOptions {
            follow_links: true,
            ..ScanOptions::default()
        })
        .discover_project_dirs(tmp.path());

        assert_eq!(
            report.dirs,
            vec![tmp.path().join("a-first"), tmp.path().join("z-last")]
        );
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Error scanning:"));
        assert!(report.is_partial());
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_project_found_only_when_following_links() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("elsewhere").join("site");
        mark_project(&real);
        let root = tmp.path().join("root");
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(&real, root.join("site")).unwrap();

        let plain = quiet_scanner(ScanOptions::default()).discover_project_dirs(&root);
        assert!(plain.dirs.is_empty());
        assert!(!plain.is_partial());

        let following = quiet_scanner(ScanOptions {
            follow_links: true,
            ..ScanOptions::default()
        })
        .discover_project_dirs(&root);
        assert_eq!(following.dirs, vec![root.join("site")]);
    }

    #[test]
    fn test_siblings_are_visited_by_name() {
        let tmp = TempDir::new().unwrap();
        for name in ["delta", "alpha", "charlie", "bravo"] {
            mark_project(&tmp.path().join(name));
        }

        let report = quiet_scanner(ScanOptions::default()).discover_project_dirs(tmp.path());

        let names: Vec<_> = report
            .dirs
            .iter()
            .filter_map(|d| d.file_name())
            .collect();
        assert_eq!(names, ["alpha", "bravo", "charlie", "delta"]);
    }
}
