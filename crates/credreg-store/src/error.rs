//! # Store Error Type
//!
//! Failures surfaced by the store backend itself. Absence of a key is
//! never an error — it is `Ok(None)` on the get path.

use thiserror::Error;

/// A failure of the underlying store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO failure reading or writing the backing medium.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted store document could not be parsed.
    #[error("store document is not valid JSON: {0}")]
    Document(#[from] serde_json::Error),

    /// Backend-specific failure with no more precise classification.
    #[error("store backend failure: {0}")]
    Backend(String),
}
