//! Template store
//!
//! Read-only local cache of fetched template bundles: one directory per
//! `(kind, id)` under the store root, optionally sub-divided by version.
//! Bundles are immutable once cached except for a whole-bundle re-fetch
//! and are never auto-deleted.

pub mod paths;

pub use paths::LIST_FILE;

use std::path::{Path, PathBuf};

use crate::catalog::Manifest;
use crate::error::{Result, ShipwrightError};
use crate::template::TemplateKind;

#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    /// Open the store at the platform default (or overridden) location
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            root: paths::store_dir()?,
        })
    }

    /// Open a store rooted at an explicit path
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding all bundles of one kind
    pub fn kind_dir(&self, kind: TemplateKind) -> PathBuf {
        self.root.join(kind.as_str())
    }

    /// Base directory of one template bundle (unversioned default)
    pub fn template_dir(&self, kind: TemplateKind, id: &str) -> PathBuf {
        self.kind_dir(kind).join(id)
    }

    /// Versioned subdirectory of one template bundle
    pub fn version_dir(&self, kind: TemplateKind, id: &str, version: &str) -> PathBuf {
        self.template_dir(kind, id).join(version)
    }

    pub fn contains(&self, kind: TemplateKind, id: &str) -> bool {
        self.template_dir(kind, id).is_dir()
    }

    pub fn has_version(&self, kind: TemplateKind, id: &str, version: &str) -> bool {
        self.version_dir(kind, id, version).is_dir()
    }

    /// Cached catalog listing for one kind
    pub fn list_path(&self, kind: TemplateKind) -> PathBuf {
        self.kind_dir(kind).join(LIST_FILE)
    }

    /// Materialize a fetched bundle manifest verbatim into the store.
    /// Entry directories are relative to the store root.
    pub fn materialize(&self, manifest: &Manifest) -> Result<()> {
        for entry in manifest {
            let dir = self.root.join(&entry.directory);
            std::fs::create_dir_all(&dir).map_err(|e| ShipwrightError::FileWriteFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;

            let file = dir.join(&entry.filename);
            std::fs::write(&file, &entry.contents).map_err(|e| {
                ShipwrightError::FileWriteFailed {
                    path: file.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(())
    }
}
