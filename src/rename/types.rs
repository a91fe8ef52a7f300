use std::path::PathBuf;
use thiserror::Error;

use crate::editor::EditorError;
use crate::scanner::ScannerError;
use crate::scratch::ScratchError;
use crate::staging::StagingError;
use crate::validator::{RenameMapping, ValidationError};

/// Which half of the two-phase move an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePhase {
    /// Moving originals into the staging directory
    StageOut,
    /// Moving staged entries back under their new names
    StageIn,
}

impl MovePhase {
    pub fn description(&self) -> &'static str {
        match self {
            MovePhase::StageOut => "stage-out",
            MovePhase::StageIn => "stage-in",
        }
    }
}

impl std::fmt::Display for MovePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Options for a rename transaction
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Stop after validation without touching the directory
    pub dry_run: bool,
}

/// Outcome of a transaction that ran to completion
#[derive(Debug, Clone)]
pub struct RenameReport {
    pub mapping: RenameMapping,
    pub dry_run: bool,
}

/// Everything that can abort a rename transaction
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error(transparent)]
    Scan(#[from] ScannerError),

    #[error(transparent)]
    Scratch(#[from] ScratchError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Staging(#[from] StagingError),

    #[error("mv failed ({phase}) for '{name}': {source}")]
    MoveFailed {
        phase: MovePhase,
        name: String,
        staging_dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A failed transaction plus where the user's edits were saved, if anywhere
#[derive(Error, Debug)]
#[error("{error}")]
pub struct TransactionFailure {
    #[source]
    pub error: TransactionError,
    pub scratch_path: Option<PathBuf>,
}

impl TransactionFailure {
    pub fn new(error: impl Into<TransactionError>, scratch_path: Option<PathBuf>) -> Self {
        Self {
            error: error.into(),
            scratch_path,
        }
    }
}
