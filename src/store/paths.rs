//! Store path utilities and constants

use std::path::PathBuf;

use crate::error::{Result, ShipwrightError};

/// Default store directory name under the user's cache directory
const STORE_DIR: &str = "shipwright";

/// Cached catalog listing file inside each kind directory
pub const LIST_FILE: &str = "list.yml";

/// Get the default template store root
///
/// Uses the platform's standard cache location (e.g. XDG on Linux,
/// Library/Caches on macOS) with a `shipwright` subdirectory. Can be
/// overridden with the `SHIPWRIGHT_CACHE_DIR` environment variable.
pub fn store_dir() -> Result<PathBuf> {
    if let Ok(store_dir) = std::env::var("SHIPWRIGHT_CACHE_DIR") {
        return Ok(PathBuf::from(store_dir));
    }

    let base = dirs::cache_dir().ok_or_else(|| ShipwrightError::IoError {
        message: "Could not determine cache directory".to_string(),
    })?;

    Ok(base.join(STORE_DIR))
}
