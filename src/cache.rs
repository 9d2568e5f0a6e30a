//! On-disk JSON cache.
//!
//! Entries are stored as individual JSON files inside one cache directory,
//! by default `~/.cache/gool/` (or the platform-specific equivalent). Writes
//! overwrite the previous file in place and are not atomic: an interrupted
//! write leaves a corrupt file, which the next `load` reports as an error and
//! callers treat as a miss.

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::file::APP_DIR;

/// Cache entry holding the project catalog.
pub const PROJECTS_CACHE: &str = "projects.json";

/// A directory of named JSON cache files.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Create a store rooted at `dir`. Nothing is created on disk until the
    /// first [`CacheStore::save`].
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The platform cache directory for this application, if one exists.
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|p| p.join(APP_DIR))
    }

    /// Create a store in [`CacheStore::default_dir`].
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no cache directory.
    pub fn open_default() -> Result<Self> {
        let Some(dir) = Self::default_dir() else {
            anyhow::bail!("Could not determine the cache directory on this platform");
        };
        Ok(Self::new(dir))
    }

    /// Full path of the cache file called `name`.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Load and deserialize the cache entry `name`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` when the entry exists and parses
    /// - `Ok(None)` when the cache directory or the entry is missing
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exists but cannot be read or does not
    /// deserialize into `T`.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.path_for(name);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read cache file {}", path.display()));
            }
        };

        let value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse cache file {}", path.display()))?;

        Ok(Some(value))
    }

    /// Serialize `value` into the cache entry `name`, replacing any previous
    /// content. The cache directory is created when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written, or if
    /// serialization fails.
    pub fn save<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create cache directory {}", self.dir.display())
        })?;

        let path = self.path_for(name);
        let json = serde_json::to_string_pretty(value)?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write cache file {}", path.display()))
    }

    /// Delete the cache entry `name`.
    ///
    /// Returns `true` when a file was removed and `false` when there was none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self, name: &str) -> Result<bool> {
        let path = self.path_for(name);

        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to remove cache file {}", path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Project, ProjectType};
    use std::path::Path;
    use tempfile::TempDir;

    fn sample_projects() -> Vec<Project> {
        let root = Path::new("/r");
        vec![
            Project::new(root, &root.join("a"), ProjectType::React, false),
            Project::new(root, &root.join("b"), ProjectType::Drupal, true),
            Project::new(root, &root.join("c"), ProjectType::Unknown, false),
        ]
    }

    #[test]
    fn test_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());
        let projects = sample_projects();

        store.save(PROJECTS_CACHE, &projects).unwrap();
        let loaded: Vec<Project> = store.load(PROJECTS_CACHE).unwrap().unwrap();

        assert_eq!(loaded, projects);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path().join("deep").join("cache"));

        store.save(PROJECTS_CACHE, &sample_projects()).unwrap();

        assert!(store.path_for(PROJECTS_CACHE).is_file());
    }

    #[test]
    fn test_save_overwrites_previous_entry() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());

        store.save(PROJECTS_CACHE, &sample_projects()).unwrap();
        store.save(PROJECTS_CACHE, &Vec::<Project>::new()).unwrap();

        let loaded: Vec<Project> = store.load(PROJECTS_CACHE).unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_cache_file_is_json_array_of_projects() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());
        store.save(PROJECTS_CACHE, &sample_projects()).unwrap();

        let raw = fs::read_to_string(store.path_for(PROJECTS_CACHE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1]["Type"], "Drupal");
        assert_eq!(entries[1]["IsDdev"], true);
    }

    #[test]
    fn test_missing_directory_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path().join("nope"));

        let loaded: Option<Vec<Project>> = store.load(PROJECTS_CACHE).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_missing_file_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());

        let loaded: Option<Vec<Project>> = store.load(PROJECTS_CACHE).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());
        fs::write(store.path_for(PROJECTS_CACHE), "[{\"Name\": ").unwrap();

        let err = store.load::<Vec<Project>>(PROJECTS_CACHE).unwrap_err();
        assert!(err.to_string().contains("Failed to parse cache file"));
    }

    #[test]
    fn test_wrong_shape_is_error() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());
        fs::write(store.path_for(PROJECTS_CACHE), r#"{"projects": []}"#).unwrap();

        assert!(store.load::<Vec<Project>>(PROJECTS_CACHE).is_err());
    }

    #[test]
    fn test_clear() {
        let tmp = TempDir::new().unwrap();
        let store = CacheStore::new(tmp.path());
        store.save(PROJECTS_CACHE, &sample_projects()).unwrap();

        assert!(store.clear(PROJECTS_CACHE).unwrap());
        assert!(!store.path_for(PROJECTS_CACHE).exists());
        assert!(!store.clear(PROJECTS_CACHE).unwrap());
    }

    #[test]
    fn test_default_dir_suffix() {
        if let Some(dir) = CacheStore::default_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
    }
}
