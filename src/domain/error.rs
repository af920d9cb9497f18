//! Domain error types for the deskpad application.

use thiserror::Error;

/// Failures raised by the key-value storage backends.
///
/// Read failures are recoverable (the caller substitutes an empty list);
/// write failures must be surfaced to the user.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage read failed: {0}")]
    Read(String),

    #[error("Storage write failed: {0}")]
    Write(String),

    #[error("Storage operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}
