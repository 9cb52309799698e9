//! Intake error types.

use quill_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    /// Input the user can correct: empty title, no signed-in owner.
    /// Nothing was written.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The store rejected the primary task insert.
    #[error("Write failed: {0}")]
    WriteFailure(#[source] StoreError),
}
