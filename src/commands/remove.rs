//! Remove command CLI wrapper

use std::path::PathBuf;

use crate::cli::RemoveArgs;
use crate::error::Result;
use crate::ops;
use crate::project::Project;

pub fn run(project: Option<PathBuf>, args: RemoveArgs) -> Result<()> {
    let project = Project::locate(project)?;
    ops::remove::run(&project, &args.id, args.dir)
}
