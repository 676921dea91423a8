//! Remove operation
//!
//! Excises a template's block from the aggregate file and optionally
//! deletes its installed directory. Collection and rendering are
//! skipped entirely.

use crate::common::fs;
use crate::error::{Result, ShipwrightError};
use crate::merge;
use crate::project::Project;
use crate::ui;

pub fn run(project: &Project, id: &str, remove_dir: bool) -> Result<()> {
    let aggregate_path = project.aggregate_path();
    if !aggregate_path.is_file() {
        return Err(ShipwrightError::AggregateMissing {
            path: aggregate_path.display().to_string(),
        });
    }

    let template_dir = project.template_dir(id);
    if !template_dir.is_dir() {
        return Err(ShipwrightError::NotInstalled { id: id.to_string() });
    }

    let doc = fs::read_file(&aggregate_path)?;
    let (updated, _) = merge::remove_block(&doc, id);
    merge::write_aggregate(&aggregate_path, &updated)?;
    ui::success(&format!("{id} removed from {}.", merge::AGGREGATE_FILE));

    if remove_dir {
        std::fs::remove_dir_all(&template_dir).map_err(|e| ShipwrightError::IoError {
            message: format!("Failed to remove {}: {e}", template_dir.display()),
        })?;
        ui::success(&format!("{id} directory removed."));
    }

    Ok(())
}
