use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Entry name is not valid UTF-8: {0}")]
    NonUtf8Name(PathBuf),

    #[error("Entry name contains a newline: {0:?}")]
    NewlineInName(String),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

/// List every entry of `target`, sorted by name.
///
/// Files, directories, symlinks and hidden entries are all included; the
/// listing is not recursive.
pub fn list_names(target: &Path) -> Result<Vec<String>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    let mut names = Vec::new();

    for entry in read_dir {
        let entry = entry?;
        trace!(entry = ?entry.path(), "Examining entry");

        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| ScannerError::NonUtf8Name(entry.path()))?;

        if name.contains('\n') || name.contains('\r') {
            return Err(ScannerError::NewlineInName(name));
        }

        names.push(name);
    }

    names.sort();

    debug!(count = names.len(), "Scan complete");

    Ok(names)
}
