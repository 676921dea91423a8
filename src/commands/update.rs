//! Update command CLI wrapper

use std::path::PathBuf;

use crate::cli::UpdateArgs;
use crate::error::Result;
use crate::ops;
use crate::project::Project;

pub fn run(project: Option<PathBuf>, args: UpdateArgs) -> Result<()> {
    let project = Project::locate(project)?;
    ops::update::run(&project, &args.ids, args.answers.as_deref())
}
