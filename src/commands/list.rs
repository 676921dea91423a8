//! List command CLI wrapper

use std::path::PathBuf;

use crate::catalog::HttpCatalog;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::ops;
use crate::project::Project;
use crate::store::TemplateStore;
use crate::template::TemplateKind;

pub fn run(project: Option<PathBuf>, args: ListArgs) -> Result<()> {
    if args.installed {
        let project = Project::locate(project)?;
        return ops::list::run_installed(&project);
    }

    let store = TemplateStore::open_default()?;
    let catalog = HttpCatalog::new()?;
    let kind = if args.packages {
        TemplateKind::Package
    } else {
        TemplateKind::Compose
    };
    ops::list::run_available(&store, &catalog, kind)
}
