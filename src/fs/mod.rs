//! Slot file I/O helpers

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{AppError, Result};

/// Read a slot file. A missing file is `Ok(None)`.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::StorageError {
            operation: "read",
            item_type: "file",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Write file atomically using temp file and rename.
///
/// The temp file is created next to the target so the final rename never
/// crosses a filesystem boundary. Readers see either the old content or the
/// new content, never a partial write.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| AppError::StorageError {
        operation: "create",
        item_type: "temp file",
        path: dir.to_path_buf(),
        source: e,
    })?;

    temp.write_all(content.as_bytes())
        .map_err(|e| AppError::StorageError {
            operation: "write",
            item_type: "temp file",
            path: temp.path().to_path_buf(),
            source: e,
        })?;

    temp.persist(path).map_err(|e| AppError::StorageError {
        operation: "rename",
        item_type: "file",
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

/// Ensure parent directory exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| AppError::StorageError {
            operation: "create",
            item_type: "directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Delete a file. A file that is already gone is not an error.
pub fn delete_if_exists(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(AppError::StorageError {
            operation: "delete",
            item_type: "file",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_optional_missing() {
        let dir = TempDir::new().unwrap();
        assert!(read_optional(&dir.path().join("nope.json")).unwrap().is_none());
    }

    #[test]
    fn test_write_atomic_creates_parents_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("slot.json");

        write_file_atomic(&path, "first").unwrap();
        write_file_atomic(&path, "second").unwrap();

        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("second"));
        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_delete_if_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slot.json");
        assert!(!delete_if_exists(&path).unwrap());
        write_file_atomic(&path, "x").unwrap();
        assert!(delete_if_exists(&path).unwrap());
        assert!(!path.exists());
    }
}
