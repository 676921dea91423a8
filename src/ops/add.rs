//! Add operation
//!
//! Resolves a version for each requested template, makes sure the
//! bundle is cached (fetching from the catalog when absent), installs
//! its raw material into the project, and runs the assembly pipeline.
//! Adding a package expands its references into concrete composes
//! first; the package itself never contributes a block.

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ops::{ensure_cached, install_bundle};
use crate::ops::update;
use crate::project::Project;
use crate::resolve::package::scan_references;
use crate::resolve::{ResolveMode, resolve};
use crate::store::TemplateStore;
use crate::template::TemplateKind;
use crate::ui;

pub struct AddOptions {
    pub version: Option<String>,
    pub package: bool,
    pub answers: Option<PathBuf>,
    pub yes: bool,
}

pub fn run(
    project: &Project,
    store: &TemplateStore,
    catalog: &dyn Catalog,
    ids: &[String],
    opts: &AddOptions,
) -> Result<()> {
    if opts.package {
        add_packages(project, store, catalog, ids, opts)
    } else {
        add_composes(project, store, catalog, ids, opts)
    }
}

fn add_composes(
    project: &Project,
    store: &TemplateStore,
    catalog: &dyn Catalog,
    ids: &[String],
    opts: &AddOptions,
) -> Result<()> {
    let mode = resolve_mode(opts);

    for id in ids {
        ensure_cached(
            store,
            catalog,
            TemplateKind::Compose,
            id,
            opts.version.as_deref(),
        )?;
        let rref = resolve(store, TemplateKind::Compose, id, opts.version.as_deref(), mode)?;
        install_bundle(project, store, &rref)?;
        ui::success(&format!("{id} added."));
    }

    if opts.yes {
        return Ok(());
    }
    update::assemble(project, ids, opts.answers.as_deref())
}

fn add_packages(
    project: &Project,
    store: &TemplateStore,
    catalog: &dyn Catalog,
    ids: &[String],
    opts: &AddOptions,
) -> Result<()> {
    let mode = resolve_mode(opts);

    for id in ids {
        ensure_cached(
            store,
            catalog,
            TemplateKind::Package,
            id,
            opts.version.as_deref(),
        )?;
        let rref = resolve(store, TemplateKind::Package, id, opts.version.as_deref(), mode)?;

        // Expand references into an explicit dependency list up front,
        // then make every constituent present before any rendering.
        let fragment_path = rref.dir.join(format!("{id}.yml"));
        let references = if fragment_path.is_file() {
            scan_references(&crate::common::fs::read_file(&fragment_path)?)
        } else {
            Vec::new()
        };

        for reference in &references {
            ensure_cached(
                store,
                catalog,
                TemplateKind::Compose,
                &reference.id,
                reference.version.as_deref(),
            )?;
        }

        for reference in &references {
            let cref = resolve(
                store,
                TemplateKind::Compose,
                &reference.id,
                reference.version.as_deref(),
                mode,
            )?;
            install_bundle(project, store, &cref)?;
            ui::success(&format!("{} added.", reference.id));
        }
    }

    if opts.yes {
        return Ok(());
    }
    // A package render pass covers every installed template, matching
    // the update-all semantics.
    update::assemble(project, &[], opts.answers.as_deref())
}

fn resolve_mode(opts: &AddOptions) -> ResolveMode {
    if opts.answers.is_some() {
        ResolveMode::Batch
    } else {
        ResolveMode::Interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Manifest, ManifestEntry};
    use crate::error::ShipwrightError;
    use crate::project::CONFIG_FILE;
    use crate::template::{FRAGMENT_DIST, PROMPT_FILE};
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    /// In-memory catalog recording which refs were requested
    struct FakeCatalog {
        bundles: BTreeMap<String, Manifest>,
        requests: RefCell<Vec<(TemplateKind, String, Option<String>)>>,
    }

    impl FakeCatalog {
        fn new() -> Self {
            Self {
                bundles: BTreeMap::new(),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn with_compose(mut self, id: &str, fragment: &str) -> Self {
            self.bundles.insert(
                format!("compose/{id}"),
                vec![ManifestEntry {
                    directory: format!("compose/{id}"),
                    filename: format!("{id}.yml"),
                    contents: fragment.to_string(),
                }],
            );
            self
        }
    }

    impl Catalog for FakeCatalog {
        fn fetch(
            &self,
            kind: TemplateKind,
            id: &str,
            version: Option<&str>,
        ) -> crate::error::Result<Manifest> {
            self.requests.borrow_mut().push((
                kind,
                id.to_string(),
                version.map(ToString::to_string),
            ));
            self.bundles
                .get(&format!("{kind}/{id}"))
                .cloned()
                .ok_or_else(|| ShipwrightError::TemplateNotFound {
                    kind: kind.to_string(),
                    id: id.to_string(),
                })
        }

        fn fetch_list(
            &self,
            _kind: TemplateKind,
        ) -> crate::error::Result<BTreeMap<String, String>> {
            Ok(BTreeMap::new())
        }
    }

    fn test_project(temp: &TempDir) -> Project {
        std::fs::write(temp.path().join(CONFIG_FILE), "compose_dir: docker\n").unwrap();
        Project::open(temp.path()).unwrap()
    }

    fn opts_yes() -> AddOptions {
        AddOptions {
            version: None,
            package: false,
            answers: None,
            yes: true,
        }
    }

    #[test]
    fn test_add_fetches_missing_bundle_and_installs() {
        let temp = TempDir::new().unwrap();
        let project = test_project(&temp);
        let store = TemplateStore::at(temp.path().join("store"));
        let catalog = FakeCatalog::new().with_compose("redis", "  redis:\n    image: redis");

        run(&project, &store, &catalog, &["redis".to_string()], &opts_yes()).unwrap();

        assert_eq!(
            *catalog.requests.borrow(),
            vec![(TemplateKind::Compose, "redis".to_string(), None)]
        );
        assert!(store.contains(TemplateKind::Compose, "redis"));
        assert!(project.template_dir("redis").join(FRAGMENT_DIST).is_file());
        // --yes skips the render pass: no aggregate yet.
        assert!(!project.aggregate_path().exists());
    }

    #[test]
    fn test_add_cached_bundle_skips_fetch() {
        let temp = TempDir::new().unwrap();
        let project = test_project(&temp);
        let store = TemplateStore::at(temp.path().join("store"));
        let dir = store.template_dir(TemplateKind::Compose, "redis");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("redis.yml"), "  redis:\n    image: redis").unwrap();

        let catalog = FakeCatalog::new();
        run(&project, &store, &catalog, &["redis".to_string()], &opts_yes()).unwrap();

        assert!(catalog.requests.borrow().is_empty());
        assert!(project.template_dir("redis").join(FRAGMENT_DIST).is_file());
    }

    #[test]
    fn test_add_missing_template_reports_not_found() {
        let temp = TempDir::new().unwrap();
        let project = test_project(&temp);
        let store = TemplateStore::at(temp.path().join("store"));
        let catalog = FakeCatalog::new();

        let err = run(&project, &store, &catalog, &["ghost".to_string()], &opts_yes())
            .unwrap_err();
        assert!(matches!(err, ShipwrightError::TemplateNotFound { .. }));
    }

    #[test]
    fn test_package_expansion_requests_constituents() {
        let temp = TempDir::new().unwrap();
        let project = test_project(&temp);
        let store = TemplateStore::at(temp.path().join("store"));

        // Seed the lamp package; its composes come from the catalog.
        let pkg_dir = store.template_dir(TemplateKind::Package, "lamp");
        std::fs::create_dir_all(&pkg_dir).unwrap();
        std::fs::write(pkg_dir.join("lamp.yml"), "{% php:7.4 %}\n{% mysql %}\n").unwrap();

        let catalog = FakeCatalog::new()
            .with_compose("php", "  php:\n    build: ./php")
            .with_compose("mysql", "  mysql:\n    image: mysql");

        let opts = AddOptions {
            version: None,
            package: true,
            answers: None,
            yes: true,
        };
        run(&project, &store, &catalog, &["lamp".to_string()], &opts).unwrap();

        assert_eq!(
            *catalog.requests.borrow(),
            vec![
                (
                    TemplateKind::Compose,
                    "php".to_string(),
                    Some("7.4".to_string())
                ),
                (TemplateKind::Compose, "mysql".to_string(), None),
            ]
        );
        // The constituents land in the project; the package itself does not.
        assert!(project.template_dir("php").is_dir());
        assert!(project.template_dir("mysql").is_dir());
        assert!(!project.template_dir("lamp").is_dir());
    }

    #[test]
    fn test_package_failed_constituent_keeps_earlier_fetches() {
        let temp = TempDir::new().unwrap();
        let project = test_project(&temp);
        let store = TemplateStore::at(temp.path().join("store"));

        let pkg_dir = store.template_dir(TemplateKind::Package, "broken");
        std::fs::create_dir_all(&pkg_dir).unwrap();
        std::fs::write(pkg_dir.join("broken.yml"), "{% redis %}\n{% ghost %}\n").unwrap();

        let catalog = FakeCatalog::new().with_compose("redis", "  redis:\n    image: redis");

        let opts = AddOptions {
            version: None,
            package: true,
            answers: None,
            yes: true,
        };
        let err = run(&project, &store, &catalog, &["broken".to_string()], &opts)
            .unwrap_err();
        assert!(matches!(err, ShipwrightError::TemplateNotFound { .. }));
        // The compose fetched before the failure stays cached for a retry.
        assert!(store.contains(TemplateKind::Compose, "redis"));
    }

    #[test]
    fn test_add_with_answers_renders_and_merges() {
        let temp = TempDir::new().unwrap();
        let project = test_project(&temp);
        let store = TemplateStore::at(temp.path().join("store"));

        let dir = store.template_dir(TemplateKind::Compose, "redis");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("redis.yml"), "  redis:\n    image: redis:{{ tag }}").unwrap();
        std::fs::write(
            dir.join(PROMPT_FILE),
            "questions:\n  - name: tag\n    message: Tag?\n",
        )
        .unwrap();

        let answers = temp.path().join("answers.yml");
        std::fs::write(&answers, "__redis__tag: \"7.2\"\n").unwrap();

        let opts = AddOptions {
            version: None,
            package: false,
            answers: Some(answers),
            yes: false,
        };
        run(&project, &store, &FakeCatalog::new(), &["redis".to_string()], &opts).unwrap();

        let doc = std::fs::read_to_string(project.aggregate_path()).unwrap();
        assert!(doc.contains("image: redis:7.2"));
    }
}
