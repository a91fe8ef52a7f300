mod codes;

pub use codes::ExitCode;

use crate::config::ConfigError;
use crate::rename::{MovePhase, TransactionError, TransactionFailure};
use crate::scanner::ScannerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transaction(#[from] TransactionFailure),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Every reported failure maps to the same exit status
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::GeneralError
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::Config(err) => {
                format!(
                    "{}\n\n\
                     Set VIREN_EDITOR, VISUAL or EDITOR to the editor command to use.",
                    err
                )
            }

            AppError::Transaction(failure) => {
                let mut msg = String::from("Something went wrong:\n");
                msg.push_str(&transaction_message(&failure.error));

                if let Some(path) = &failure.scratch_path {
                    msg.push_str(&format!("\nFile list saved to {}", path.display()));
                }
                msg
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

fn transaction_message(error: &TransactionError) -> String {
    match error {
        TransactionError::Scan(ScannerError::PathNotFound(path)) => {
            format!("The specified directory does not exist:\n  {}", path.display())
        }

        TransactionError::Scan(ScannerError::NewlineInName(name)) => {
            format!(
                "Entry {:?} contains a newline and cannot be edited as a line of text.\n\
                 Rename it by other means first.",
                name
            )
        }

        TransactionError::MoveFailed {
            phase: MovePhase::StageOut,
            staging_dir,
            ..
        } => {
            format!(
                "{}\n\n\
                 Entries staged so far were moved, under their old names, into:\n  {}\n\
                 The rest are still in the working directory.\n\
                 Move the staged entries back manually, then remove that directory.",
                error,
                staging_dir.display()
            )
        }

        TransactionError::MoveFailed {
            phase: MovePhase::StageIn,
            staging_dir,
            ..
        } => {
            format!(
                "{}\n\n\
                 Entries that were not yet moved back remain, under their old names, in:\n  {}\n\
                 Entries already moved back have their new names.\n\
                 Move the remaining entries out manually, then remove that directory.",
                error,
                staging_dir.display()
            )
        }

        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorError;
    use crate::validator::ValidationError;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let err = AppError::Other("boom".to_string());
        assert_eq!(err.exit_code(), ExitCode::GeneralError);

        let err = AppError::Config(ConfigError::EmptyEditor);
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_detailed_message_includes_scratch_path() {
        let err: AppError = TransactionFailure::new(
            ValidationError::DuplicateName { line: 4 },
            Some(PathBuf::from("/tmp/viren1234")),
        )
        .into();

        let msg = err.detailed_message();
        assert!(msg.starts_with("Something went wrong:"));
        assert!(msg.contains("Line 4: duplicate filename"));
        assert!(msg.contains("File list saved to /tmp/viren1234"));
    }

    #[test]
    fn test_editor_failure_message() {
        let err: AppError = TransactionFailure::new(
            EditorError::Failed { code: Some(2) },
            Some(PathBuf::from("/tmp/viren1234")),
        )
        .into();

        assert!(err
            .detailed_message()
            .contains("editor failed with return code 2"));
    }

    #[test]
    fn test_move_failure_names_staging_dir() {
        let err: AppError = TransactionFailure::new(
            TransactionError::MoveFailed {
                phase: MovePhase::StageOut,
                name: "a".to_string(),
                staging_dir: PathBuf::from("/work/viren-2a"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
            Some(PathBuf::from("/tmp/viren1234")),
        )
        .into();

        let msg = err.detailed_message();
        assert!(msg.contains("mv failed (stage-out) for 'a'"));
        assert!(msg.contains("/work/viren-2a"));
        assert!(msg.contains("still in the working directory"));
        assert!(!msg.contains("not yet moved back"));
    }

    #[test]
    fn test_stage_in_failure_hint() {
        let err: AppError = TransactionFailure::new(
            TransactionError::MoveFailed {
                phase: MovePhase::StageIn,
                name: "b".to_string(),
                staging_dir: PathBuf::from("/work/viren-3b"),
                source: std::io::Error::new(std::io::ErrorKind::AlreadyExists, "exists"),
            },
            Some(PathBuf::from("/tmp/viren1234")),
        )
        .into();

        let msg = err.detailed_message();
        assert!(msg.contains("mv failed (stage-in) for 'b'"));
        assert!(msg.contains("not yet moved back remain, under their old names, in:\n  /work/viren-3b"));
        assert!(!msg.contains("still in the working directory"));
    }

    #[test]
    fn test_scan_failure_has_no_scratch_path() {
        let err: AppError = TransactionFailure::new(
            ScannerError::PathNotFound(PathBuf::from("/missing")),
            None,
        )
        .into();

        let msg = err.detailed_message();
        assert!(msg.contains("does not exist"));
        assert!(!msg.contains("File list saved"));
    }
}
