use std::env;
use thiserror::Error;
use tracing::debug;

/// Environment variables consulted for the editor command, in priority order
pub const ENV_VIREN_EDITOR: &str = "VIREN_EDITOR";
pub const ENV_VISUAL: &str = "VISUAL";
pub const ENV_EDITOR: &str = "EDITOR";

/// Editor used when no environment variable is set
pub const DEFAULT_EDITOR: &str = "editor";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Editor command could not be parsed: {0}")]
    UnparsableEditor(String),

    #[error("Editor command is empty")]
    EmptyEditor,
}

/// Resolved editor command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorConfig {
    /// Split a shell-style command string into program and arguments
    pub fn parse(command: &str) -> Result<Self, ConfigError> {
        let mut parts = shlex::split(command)
            .ok_or_else(|| ConfigError::UnparsableEditor(command.to_string()))?
            .into_iter();

        let program = parts.next().ok_or(ConfigError::EmptyEditor)?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Load the editor command from the environment
    ///
    /// Checks `VIREN_EDITOR`, `VISUAL` and `EDITOR` in turn, skipping empty
    /// values, and falls back to `editor`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let command = [ENV_VIREN_EDITOR, ENV_VISUAL, ENV_EDITOR]
            .iter()
            .find_map(|var| {
                env::var(var)
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| {
                        debug!(var = %var, command = %v, "Editor taken from environment");
                        v
                    })
            })
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        Self::parse(&command)
    }
}
