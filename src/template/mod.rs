//! Template bundle data model
//!
//! A template bundle is the cached raw material for one catalog entry:
//! a compose fragment, an optional Dockerfile, and an ordered list of
//! questions from its prompt definitions file.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShipwrightError};

/// Prompt definitions file name inside a bundle directory
pub const PROMPT_FILE: &str = "prompt.yml";

/// Raw compose fragment copy inside an installed template directory
pub const FRAGMENT_DIST: &str = "docker-compose.dist";

/// Raw Dockerfile copy inside an installed template directory
pub const DOCKERFILE_DIST: &str = "Dockerfile.dist";

/// Configuration directory shipped with some bundles
pub const CONF_DIR: &str = "conf";

/// Catalog entry kind: a compose contributes its own block, a package
/// only references other composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Compose,
    Package,
}

impl TemplateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Compose => "compose",
            TemplateKind::Package => "package",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One requested variable from a prompt definitions file.
///
/// `default` and `choices` drive the interactive session; any further
/// fields are carried through opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_yaml::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Question {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            default: None,
            choices: None,
            extra: BTreeMap::new(),
        }
    }
}

/// Prompt definitions file: an ordered `questions` list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptFile {
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl PromptFile {
    /// Load a prompt file; a missing file yields an empty question list.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let contents =
            std::fs::read_to_string(path).map_err(|e| ShipwrightError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        serde_yaml::from_str(&contents).map_err(|e| ShipwrightError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Cached raw material for one catalog entry and version
#[derive(Debug, Clone)]
pub struct TemplateBundle {
    pub id: String,
    pub version: Option<String>,
    pub dockerfile: Option<String>,
    pub fragment: Option<String>,
    pub questions: Vec<Question>,
}

impl TemplateBundle {
    /// Load a bundle from an installed project template directory
    /// (`docker-compose.dist`, `Dockerfile.dist`, `prompt.yml`).
    pub fn load_installed(dir: &Path, id: &str) -> Result<Self> {
        let fragment = read_optional(&dir.join(FRAGMENT_DIST))?;
        let dockerfile = read_optional(&dir.join(DOCKERFILE_DIST))?;
        let questions = PromptFile::load(&dir.join(PROMPT_FILE))?.questions;

        Ok(Self {
            id: id.to_string(),
            version: None,
            dockerfile,
            fragment,
            questions,
        })
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|e| ShipwrightError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}
