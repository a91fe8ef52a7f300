mod transaction;
mod types;

pub use transaction::RenameTransaction;
pub use types::{
    MovePhase, RenameOptions, RenameReport, TransactionError, TransactionFailure,
};
