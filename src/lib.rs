pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod rename;
pub mod scanner;
pub mod scratch;
pub mod staging;
pub mod validator;

pub use config::{ConfigError, EditorConfig};
pub use editor::{Editor, EditorError, ExternalEditor};
pub use error::{AppError, ExitCode};
pub use rename::{
    MovePhase, RenameOptions, RenameReport, RenameTransaction, TransactionError,
    TransactionFailure,
};
pub use scanner::{list_names, ScannerError};
pub use scratch::{parse_edited_names, ScratchError, ScratchFile};
pub use staging::{allocate, StagingDir, StagingError};
pub use validator::{validate, RenameMapping, RenamePair, ValidationError};
