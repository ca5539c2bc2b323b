//! Commerce error types.

use thiserror::Error;

/// Errors that can occur when loading storefront data.
///
/// Normal empty-result conditions (no query matches, unknown product id)
/// are represented as empty sequences or `None`, never as errors.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// The product dataset could not be parsed.
    #[error("dataset parse error: {0}")]
    Dataset(#[from] serde_json::Error),

    /// The product dataset could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
