use thiserror::Error;

/// A single old name paired with its replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    /// Name currently on disk
    pub old_name: String,
    /// Name the entry will have afterwards
    pub new_name: String,
}

impl RenamePair {
    pub fn is_unchanged(&self) -> bool {
        self.old_name == self.new_name
    }
}

/// Index-aligned pairing of every original name with its new name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMapping {
    pub pairs: Vec<RenamePair>,
}

impl RenameMapping {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of entries whose name actually changes
    pub fn changed_count(&self) -> usize {
        self.pairs.iter().filter(|p| !p.is_unchanged()).count()
    }

    pub fn old_names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.old_name.as_str())
    }

    pub fn new_names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|p| p.new_name.as_str())
    }
}

/// Structural problem with an edited name list.
///
/// Line numbers are 1-based positions in the edited list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Edited list has {actual} names, expected {expected}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("Line {line}: empty filename")]
    EmptyName { line: usize },

    #[error("Line {line}: path separator in filename")]
    PathSeparatorInName { line: usize },

    #[error("Line {line}: filename is . or ..")]
    ReservedName { line: usize },

    #[error("Line {line}: duplicate filename")]
    DuplicateName { line: usize },
}

impl ValidationError {
    /// Offending line, if the error concerns a single entry
    pub fn line(&self) -> Option<usize> {
        match self {
            ValidationError::CountMismatch { .. } => None,
            ValidationError::EmptyName { line }
            | ValidationError::PathSeparatorInName { line }
            | ValidationError::ReservedName { line }
            | ValidationError::DuplicateName { line } => Some(*line),
        }
    }
}
