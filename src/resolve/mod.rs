//! Version resolution
//!
//! Decides which stored variant of a template to use: an explicit
//! version, the unversioned default, a single available version
//! auto-selected, or an interactive choice among several.

pub mod package;

use std::path::{Path, PathBuf};

use inquire::Select;
use regex::Regex;

use crate::error::{Result, ShipwrightError};
use crate::store::TemplateStore;
use crate::template::TemplateKind;

/// How ambiguous version choices are settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// Prompt the user to choose among available versions
    Interactive,
    /// No interaction possible; ambiguity is an unresolved-version error
    Batch,
}

/// A concrete store directory selected for one template
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRef {
    pub kind: TemplateKind,
    pub id: String,
    pub version: Option<String>,
    pub dir: PathBuf,
}

/// Normalize a user-supplied version into its store subdirectory name:
/// a bare `7.4` becomes `v7.4`.
pub fn normalize_version(version: &str) -> String {
    if version.starts_with('v') || version.starts_with("version-") {
        version.to_string()
    } else {
        format!("v{version}")
    }
}

/// Version subdirectories of a template bundle, sorted
pub fn available_versions(template_dir: &Path) -> Vec<String> {
    let Ok(re) = Regex::new(r"^(v-?|version-)") else {
        return Vec::new();
    };
    let Ok(entries) = std::fs::read_dir(template_dir) else {
        return Vec::new();
    };

    let mut versions: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| re.is_match(name))
        .collect();
    versions.sort();
    versions
}

/// Resolve `(kind, id, explicit version?)` against the store.
///
/// Decision order: explicit version subdirectory if given; unversioned
/// default when no version subdirectories exist; lone version
/// auto-selected without prompting; otherwise an interactive choice (or
/// an unresolved-version error in batch mode).
pub fn resolve(
    store: &TemplateStore,
    kind: TemplateKind,
    id: &str,
    explicit: Option<&str>,
    mode: ResolveMode,
) -> Result<ResolvedRef> {
    let template_dir = store.template_dir(kind, id);
    if !template_dir.is_dir() {
        return Err(ShipwrightError::TemplateNotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        });
    }

    let versions = available_versions(&template_dir);

    if let Some(explicit) = explicit {
        let version = normalize_version(explicit);
        if store.has_version(kind, id, &version) {
            return Ok(resolved(store, kind, id, Some(version)));
        }
        return Err(ShipwrightError::UnresolvedVersion {
            id: id.to_string(),
            available: display_versions(&versions),
        });
    }

    match versions.len() {
        0 => Ok(resolved(store, kind, id, None)),
        1 => Ok(resolved(store, kind, id, versions.into_iter().next())),
        _ => match mode {
            ResolveMode::Interactive => {
                let version = Select::new(&format!("Choose {id} version"), versions)
                    .with_help_message("↑↓ to move, ENTER to select")
                    .prompt()?;
                Ok(resolved(store, kind, id, Some(version)))
            }
            ResolveMode::Batch => Err(ShipwrightError::UnresolvedVersion {
                id: id.to_string(),
                available: display_versions(&versions),
            }),
        },
    }
}

fn resolved(
    store: &TemplateStore,
    kind: TemplateKind,
    id: &str,
    version: Option<String>,
) -> ResolvedRef {
    let dir = match version {
        Some(ref v) => store.version_dir(kind, id, v),
        None => store.template_dir(kind, id),
    };
    ResolvedRef {
        kind,
        id: id.to_string(),
        version,
        dir,
    }
}

fn display_versions(versions: &[String]) -> String {
    if versions.is_empty() {
        "none".to_string()
    } else {
        versions.join(", ")
    }
}
