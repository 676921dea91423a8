//! List operation
//!
//! Shows available templates from the catalog listing (cached on first
//! use) or the templates installed in the current project.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::common::fs;
use crate::error::Result;
use crate::project::Project;
use crate::store::TemplateStore;
use crate::template::TemplateKind;
use crate::ui;

pub fn run_available(
    store: &TemplateStore,
    catalog: &dyn Catalog,
    kind: TemplateKind,
) -> Result<()> {
    let listing = load_listing(store, catalog, kind)?;

    ui::heading(&format!("Available {kind}:"));
    ui::heading(&"-".repeat(50));
    for (name, description) in &listing {
        let add_hint = match kind {
            TemplateKind::Compose => format!("{name} -> shipwright add {name}"),
            TemplateKind::Package => format!("{name} -> shipwright add --package {name}"),
        };
        ui::info(&add_hint);
        ui::dim(description);
    }

    Ok(())
}

pub fn run_installed(project: &Project) -> Result<()> {
    let ids = project.installed_ids()?;
    if ids.is_empty() {
        ui::info("No templates installed.");
        return Ok(());
    }

    ui::heading("Installed templates:");
    for id in &ids {
        ui::info(&format!("  {id}"));
    }
    Ok(())
}

/// Load the cached catalog listing for a kind, fetching and caching it
/// on first use.
fn load_listing(
    store: &TemplateStore,
    catalog: &dyn Catalog,
    kind: TemplateKind,
) -> Result<BTreeMap<String, String>> {
    let path = store.list_path(kind);
    if path.is_file() {
        let contents = fs::read_file(&path)?;
        return Ok(serde_yaml::from_str(&contents)?);
    }

    ui::info(&format!("Pulling {kind} list from catalog..."));
    let listing = catalog.fetch_list(kind)?;
    fs::write_file(&path, &serde_yaml::to_string(&listing)?)?;
    Ok(listing)
}
