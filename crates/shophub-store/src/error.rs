//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a session store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize or deserialize a value.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to read or write the backing file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The in-memory store's lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}
