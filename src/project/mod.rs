//! Project context
//!
//! The compose directory and aggregate file live inside a project whose
//! root carries a `shipwright.yml` configuration file. The context is
//! passed explicitly to the engine rather than looked up ambiently.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShipwrightError};
use crate::merge::AGGREGATE_FILE;

/// Project configuration file name
pub const CONFIG_FILE: &str = "shipwright.yml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory holding installed templates and the aggregate file,
    /// relative to the project root
    #[serde(default)]
    pub compose_dir: String,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub compose_dir: PathBuf,
}

impl Project {
    /// Open the project rooted at `root`, reading its configuration.
    pub fn open(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        if !config_path.is_file() {
            return Err(ShipwrightError::ConfigNotFound {
                path: config_path.display().to_string(),
            });
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| ShipwrightError::FileReadFailed {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })?;
        let config: ProjectConfig =
            serde_yaml::from_str(&contents).map_err(|e| ShipwrightError::ConfigParseFailed {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })?;

        if config.compose_dir.is_empty() {
            return Err(ShipwrightError::ComposeDirMissing);
        }

        Ok(Self {
            root: root.to_path_buf(),
            compose_dir: root.join(config.compose_dir),
        })
    }

    /// Walk up from `dir` looking for a project root
    pub fn find_from(dir: &Path) -> Option<PathBuf> {
        let mut current = Some(dir);
        while let Some(dir) = current {
            if dir.join(CONFIG_FILE).is_file() {
                return Some(dir.to_path_buf());
            }
            current = dir.parent();
        }
        None
    }

    /// Locate and open a project: an explicit root, or the nearest one
    /// above the current directory.
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self> {
        let root = match explicit {
            Some(root) => root,
            None => {
                let cwd = std::env::current_dir().map_err(|e| ShipwrightError::IoError {
                    message: format!("Failed to get current directory: {e}"),
                })?;
                Self::find_from(&cwd).ok_or_else(|| ShipwrightError::ConfigNotFound {
                    path: cwd.join(CONFIG_FILE).display().to_string(),
                })?
            }
        };
        Self::open(&root)
    }

    /// Installed directory of one template
    pub fn template_dir(&self, id: &str) -> PathBuf {
        self.compose_dir.join(id)
    }

    /// Path of the aggregate orchestration file
    pub fn aggregate_path(&self) -> PathBuf {
        self.compose_dir.join(AGGREGATE_FILE)
    }

    /// Ids of all installed templates (subdirectories of the compose
    /// directory), sorted.
    pub fn installed_ids(&self) -> Result<Vec<String>> {
        if !self.compose_dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries =
            std::fs::read_dir(&self.compose_dir).map_err(|e| ShipwrightError::FileReadFailed {
                path: self.compose_dir.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut ids: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        ids.sort();
        Ok(ids)
    }
}
