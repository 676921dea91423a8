//! Assembly operations
//!
//! One module per top-level request (add, update, remove, list), plus
//! the shared install/fetch helpers they sequence.

pub mod add;
pub mod list;
pub mod remove;
pub mod update;

use crate::catalog::Catalog;
use crate::common::fs;
use crate::error::{Result, ShipwrightError};
use crate::progress;
use crate::project::Project;
use crate::resolve::{ResolvedRef, normalize_version};
use crate::store::TemplateStore;
use crate::template::{CONF_DIR, DOCKERFILE_DIST, FRAGMENT_DIST, PROMPT_FILE, TemplateKind};

/// Make sure a bundle (and, if requested, a specific version of it) is
/// present in the store, fetching it from the catalog when absent.
/// Already-cached bundles are never re-fetched.
pub(crate) fn ensure_cached(
    store: &TemplateStore,
    catalog: &dyn Catalog,
    kind: TemplateKind,
    id: &str,
    version: Option<&str>,
) -> Result<()> {
    let version_missing = version
        .map(|v| !store.has_version(kind, id, &normalize_version(v)))
        .unwrap_or(false);

    if store.contains(kind, id) && !version_missing {
        return Ok(());
    }

    let pb = progress::fetch_spinner(&format!("Pulling {id} {kind} from catalog..."));
    let manifest = catalog.fetch(kind, id, version);
    progress::finish(pb);

    store.materialize(&manifest?)
}

/// Copy a resolved bundle's raw material into the project's template
/// directory: fragment and Dockerfile as `.dist` files, the prompt
/// definitions, and any shipped `conf/` directory.
pub(crate) fn install_bundle(
    project: &Project,
    store: &TemplateStore,
    rref: &ResolvedRef,
) -> Result<()> {
    let target = project.template_dir(&rref.id);
    std::fs::create_dir_all(&target).map_err(|e| ShipwrightError::FileWriteFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    })?;

    let conf = rref.dir.join(CONF_DIR);
    if conf.is_dir() {
        fs::copy_dir_recursive(&conf, &target.join(CONF_DIR)).map_err(|e| {
            ShipwrightError::FileWriteFailed {
                path: target.join(CONF_DIR).display().to_string(),
                reason: e.to_string(),
            }
        })?;
    }

    let dockerfile = rref.dir.join("Dockerfile");
    if dockerfile.is_file() {
        fs::copy_file(&dockerfile, &target.join(DOCKERFILE_DIST))?;
    }

    let fragment = rref.dir.join(format!("{}.yml", rref.id));
    if fragment.is_file() {
        fs::copy_file(&fragment, &target.join(FRAGMENT_DIST))?;
    }

    // The prompt file of a versioned variant overrides the bundle's own.
    let prompt = [
        rref.dir.join(PROMPT_FILE),
        store.template_dir(rref.kind, &rref.id).join(PROMPT_FILE),
    ]
    .into_iter()
    .find(|p| p.is_file());
    if let Some(prompt) = prompt {
        fs::copy_file(&prompt, &target.join(PROMPT_FILE))?;
    }

    Ok(())
}
