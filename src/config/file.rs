//! Configuration file support for persistent settings.
//!
//! This module loads the JSON configuration located at
//! `~/.config/gool/config.json` (or the platform-specific equivalent).
//! Configuration file values serve as defaults that can be overridden by CLI
//! arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```json
//! {
//!   "ProjectsRootDir": "~/Projects",
//!   "Skip": ["node_modules", "vendor"],
//!   "MaxDepth": 6,
//!   "FollowLinks": false,
//!   "Verbose": false
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the per-user application directory under the config and cache roots.
pub const APP_DIR: &str = "gool";

/// Contents written when the config file does not exist yet.
pub const CONFIG_TEMPLATE: &str = "{\n  \"ProjectsRootDir\": \"\"\n}\n";

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FileConfig {
    /// Directory scanned for projects
    pub projects_root_dir: Option<PathBuf>,

    /// Directory names never descended into while scanning
    pub skip: Option<Vec<PathBuf>>,

    /// Maximum directory depth to scan
    pub max_depth: Option<usize>,

    /// Whether to descend into symlinked directories
    pub follow_links: Option<bool>,

    /// Whether to report scan and cache warnings
    pub verbose: Option<bool>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The file lives at `<config_dir>/gool/config.json`, where `<config_dir>`
    /// is the platform-specific configuration directory (e.g. `~/.config` on
    /// Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join("config.json"))
    }

    /// Load configuration from the default config file location.
    ///
    /// A missing file is created from [`CONFIG_TEMPLATE`] and yields the
    /// default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The platform config directory cannot be determined
    /// - The config file cannot be created or read
    /// - The config file contains invalid JSON or unexpected value types
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            anyhow::bail!("Could not determine the config directory on this platform");
        };

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, creating it when missing.
    ///
    /// A file holding only whitespace is treated like the empty template.
    ///
    /// # Errors
    ///
    /// See [`FileConfig::load`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::write_template(path)?;
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))
    }

    /// Write [`CONFIG_TEMPLATE`] to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be created.
    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        std::fs::write(path, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// The configured projects root, tilde-expanded.
    ///
    /// An empty `ProjectsRootDir` counts as unset.
    #[must_use]
    pub fn projects_root(&self) -> Option<PathBuf> {
        self.projects_root_dir
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(expand_tilde)
    }
}
