//! Staging directory allocation.
//!
//! The staging directory lives inside the working directory and holds every
//! original entry between the two move phases. Its name never collides with a
//! rename source or destination, and it is created with a single
//! `create_dir` call so an entry appearing under the same name between the
//! choice and the creation is detected instead of reused.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Recognizable prefix of every staging directory name
pub const STAGING_PREFIX: &str = "viren-";

/// Candidate names tried before giving up
pub const MAX_ATTEMPTS: usize = 10;

#[derive(Error, Debug)]
pub enum StagingError {
    #[error("Failed to create temp dir after {attempts} attempts")]
    AllocationExhausted { attempts: usize },

    #[error("Failed to create temp dir {path}: {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove temp dir {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A freshly created, empty staging directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingDir {
    pub name: String,
    pub path: PathBuf,
}

impl StagingDir {
    /// Path of `name` inside the staging directory
    pub fn entry(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Remove the staging directory; fails if it is not empty.
    pub fn remove(self) -> Result<(), StagingError> {
        fs::remove_dir(&self.path).map_err(|source| StagingError::RemoveFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = ?self.path, "Removed staging directory");
        Ok(())
    }
}

/// Random candidate: prefix plus a 10-digit-range number in hex
pub fn random_candidate() -> String {
    let n: u64 = rand::thread_rng().gen_range(1_000_000_000..10_000_000_000);
    format!("{}{:x}", STAGING_PREFIX, n)
}

/// Create a staging directory inside `parent` whose name is not in `forbidden`.
pub fn allocate(parent: &Path, forbidden: &HashSet<&str>) -> Result<StagingDir, StagingError> {
    allocate_with(parent, forbidden, random_candidate)
}

/// Like [`allocate`], drawing candidate names from `next_candidate`.
pub fn allocate_with<F>(
    parent: &Path,
    forbidden: &HashSet<&str>,
    mut next_candidate: F,
) -> Result<StagingDir, StagingError>
where
    F: FnMut() -> String,
{
    for attempt in 1..=MAX_ATTEMPTS {
        let name = next_candidate();

        if forbidden.contains(name.as_str()) {
            debug!(attempt, name = %name, "Candidate is a rename source or destination");
            continue;
        }

        let path = parent.join(&name);
        match fs::create_dir(&path) {
            Ok(()) => {
                info!(path = ?path, attempt, "Created staging directory");
                return Ok(StagingDir { name, path });
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(attempt, name = %name, "Candidate already exists on disk");
            }
            Err(source) => return Err(StagingError::CreateFailed { path, source }),
        }
    }

    warn!(attempts = MAX_ATTEMPTS, "Could not allocate a staging directory");
    Err(StagingError::AllocationExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_random_candidate_format() {
        let name = random_candidate();
        let suffix = name.strip_prefix(STAGING_PREFIX).unwrap();

        assert!(suffix.len() >= 8);
        assert!(u64::from_str_radix(suffix, 16).is_ok());
    }

    #[test]
    fn test_allocate_creates_directory() {
        let dir = tempdir().unwrap();
        let forbidden = HashSet::new();

        let staging = allocate(dir.path(), &forbidden).unwrap();

        assert!(staging.path.is_dir());
        assert!(staging.name.starts_with(STAGING_PREFIX));
        assert_eq!(staging.path, dir.path().join(&staging.name));
    }

    #[test]
    fn test_skips_forbidden_names() {
        let dir = tempdir().unwrap();
        let forbidden: HashSet<&str> = ["viren-1", "viren-2"].into_iter().collect();
        let mut candidates = vec!["viren-1", "viren-2", "viren-3"].into_iter();

        let staging =
            allocate_with(dir.path(), &forbidden, || candidates.next().unwrap().to_string())
                .unwrap();

        assert_eq!(staging.name, "viren-3");
        assert!(!dir.path().join("viren-1").exists());
        assert!(!dir.path().join("viren-2").exists());
    }

    #[test]
    fn test_skips_existing_entries() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("viren-taken"), "keep me").unwrap();
        let forbidden = HashSet::new();
        let mut candidates = vec!["viren-taken", "viren-free"].into_iter();

        let staging =
            allocate_with(dir.path(), &forbidden, || candidates.next().unwrap().to_string())
                .unwrap();

        assert_eq!(staging.name, "viren-free");
        assert_eq!(
            fs::read_to_string(dir.path().join("viren-taken")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_exhausted_after_bounded_attempts() {
        let dir = tempdir().unwrap();
        let forbidden: HashSet<&str> = ["viren-same"].into_iter().collect();
        let mut calls = 0;

        let result = allocate_with(dir.path(), &forbidden, || {
            calls += 1;
            "viren-same".to_string()
        });

        assert!(matches!(
            result,
            Err(StagingError::AllocationExhausted { attempts: 10 })
        ));
        assert_eq!(calls, MAX_ATTEMPTS);
    }

    #[test]
    fn test_exhausted_when_every_candidate_exists() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("viren-busy")).unwrap();
        let forbidden = HashSet::new();

        let result = allocate_with(dir.path(), &forbidden, || "viren-busy".to_string());

        assert!(matches!(
            result,
            Err(StagingError::AllocationExhausted { .. })
        ));
    }

    #[test]
    fn test_create_failure_is_reported() {
        let dir = tempdir().unwrap();
        let missing_parent = dir.path().join("missing");
        let forbidden = HashSet::new();

        let result = allocate(&missing_parent, &forbidden);

        assert!(matches!(result, Err(StagingError::CreateFailed { .. })));
    }

    #[test]
    fn test_remove_requires_empty_directory() {
        let dir = tempdir().unwrap();
        let staging = allocate(dir.path(), &HashSet::new()).unwrap();
        fs::write(staging.entry("leftover"), "").unwrap();

        assert!(matches!(
            staging.clone().remove(),
            Err(StagingError::RemoveFailed { .. })
        ));

        fs::remove_file(staging.entry("leftover")).unwrap();
        let path = staging.path.clone();
        staging.remove().unwrap();
        assert!(!path.exists());
    }
}
