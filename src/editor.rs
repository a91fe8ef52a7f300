//! Editor collaborator.
//!
//! The editor receives the path of the scratch file, edits it in place and
//! signals acceptance with exit status 0. Only the exit status and the file
//! contents afterwards are relied upon.

use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::EditorConfig;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to launch editor '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", failure_message(.code))]
    Failed { code: Option<i32> },
}

fn failure_message(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("editor failed with return code {}", code),
        None => "editor was terminated by a signal".to_string(),
    }
}

/// Something that lets the user edit a file in place
pub trait Editor {
    fn edit(&self, path: &Path) -> Result<(), EditorError>;
}

/// Runs an external editor process and waits for it
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    config: EditorConfig,
}

impl ExternalEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }
}

impl Editor for ExternalEditor {
    fn edit(&self, path: &Path) -> Result<(), EditorError> {
        info!(program = %self.config.program, path = ?path, "Launching editor");

        let status = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(path)
            .status()
            .map_err(|source| EditorError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        if !status.success() {
            warn!(status = ?status, "Editor exited unsuccessfully");
            return Err(EditorError::Failed {
                code: status.code(),
            });
        }

        debug!("Editor exited successfully");
        Ok(())
    }
}
