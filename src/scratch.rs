use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Prefix of scratch file names in the temp directory
pub const SCRATCH_PREFIX: &str = "viren";

#[derive(Error, Debug)]
pub enum ScratchError {
    #[error("Failed to create scratch file: {0}")]
    Create(#[source] io::Error),

    #[error("Failed to read scratch file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove scratch file {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Persisted text file holding the editable name list.
///
/// The file is never removed implicitly; [`ScratchFile::remove`] is only
/// called once a rename has fully succeeded, so edits survive any failure.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Write `names`, one per line, into a new file inside `dir`
    pub fn create_in(dir: &Path, names: &[String]) -> Result<Self, ScratchError> {
        let mut file = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempfile_in(dir)
            .map_err(ScratchError::Create)?;

        file.write_all(names.join("\n").as_bytes())
            .and_then(|_| file.flush())
            .map_err(ScratchError::Create)?;

        let (_, path) = file.keep().map_err(|e| ScratchError::Create(e.error))?;

        info!(path = ?path, count = names.len(), "Wrote scratch file");

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the edited list back
    pub fn read_names(&self) -> Result<Vec<String>, ScratchError> {
        let content = fs::read_to_string(&self.path).map_err(|source| ScratchError::Read {
            path: self.path.clone(),
            source,
        })?;

        let names = parse_edited_names(&content);
        debug!(count = names.len(), "Read edited names");
        Ok(names)
    }

    pub fn remove(self) -> Result<(), ScratchError> {
        fs::remove_file(&self.path).map_err(|source| ScratchError::Remove {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = ?self.path, "Removed scratch file");
        Ok(())
    }
}

/// Split edited text into names: one per line, surrounding whitespace trimmed.
///
/// Blank lines are kept as empty names so the validator can reject them.
pub fn parse_edited_names(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim().to_string()).collect()
}
