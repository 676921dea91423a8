//! Add command CLI wrapper

use std::path::PathBuf;

use crate::catalog::HttpCatalog;
use crate::cli::AddArgs;
use crate::error::Result;
use crate::ops;
use crate::ops::add::AddOptions;
use crate::project::Project;
use crate::store::TemplateStore;

pub fn run(project: Option<PathBuf>, args: AddArgs) -> Result<()> {
    let project = Project::locate(project)?;
    let store = TemplateStore::open_default()?;
    let catalog = HttpCatalog::new()?;

    let opts = AddOptions {
        version: args.version,
        package: args.package,
        answers: args.answers,
        yes: args.yes,
    };
    ops::add::run(&project, &store, &catalog, &args.ids, &opts)
}
