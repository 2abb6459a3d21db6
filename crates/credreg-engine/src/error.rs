//! # Transition Engine Errors
//!
//! The declared error set of the four transitions. Each error is returned
//! at the point of detection; no operation continues past a failed
//! precondition, and none is retried by the engine.

use credreg_core::{DecodeError, DegreeId, EncodeError};
use credreg_store::StoreError;
use thiserror::Error;

/// Errors produced by the transition engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Create was called with an id that already has a record.
    #[error("degree {id} already exists")]
    AlreadyExists {
        /// The duplicate identifier.
        id: DegreeId,
    },

    /// The targeted record does not exist.
    #[error("degree {id} does not exist")]
    NotFound {
        /// The missing identifier.
        id: DegreeId,
    },

    /// A view was attempted with no remaining views.
    #[error("no remaining views for degree {id}")]
    Forbidden {
        /// The exhausted identifier.
        id: DegreeId,
    },

    /// The underlying store failed; propagated verbatim.
    #[error("store failure: {0}")]
    Store(#[from] StoreError),

    /// Persisted bytes at the record's key are corrupt.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The record could not be serialized for the write path.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
