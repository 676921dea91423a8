//! Common file system operations with unified error handling

use std::path::Path;

use crate::error::{Result, ShipwrightError};

/// Read a file into a string with a domain error
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ShipwrightError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write a file, creating parent directories as needed
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ShipwrightError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    std::fs::write(path, contents).map_err(|e| ShipwrightError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Copy a file, creating the destination's parent directories as needed
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ShipwrightError::FileWriteFailed {
            path: dst.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    std::fs::copy(src, dst).map_err(|e| ShipwrightError::FileWriteFailed {
        path: dst.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

/// Copy a directory recursively
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in walkdir::WalkDir::new(src) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(std::io::Error::other)?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a/b/c.txt");
        write_file(&path, "hello").unwrap();
        assert_eq!(read_file(&path).unwrap(), "hello");
    }

    #[test]
    fn test_copy_dir_recursive() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        std::fs::create_dir_all(src.join("nested")).unwrap();
        std::fs::write(src.join("top.txt"), "top").unwrap();
        std::fs::write(src.join("nested/deep.txt"), "deep").unwrap();

        let dst = temp.path().join("dst");
        copy_dir_recursive(&src, &dst).unwrap();
        assert_eq!(std::fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(
            std::fs::read_to_string(dst.join("nested/deep.txt")).unwrap(),
            "deep"
        );
    }

    #[test]
    fn test_read_file_missing_is_domain_error() {
        let temp = TempDir::new().unwrap();
        let err = read_file(&temp.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ShipwrightError::FileReadFailed { .. }));
    }
}
