//! # Codec Error Types
//!
//! Errors produced while converting between the in-memory record and its
//! persisted byte form. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.

use thiserror::Error;

/// Persisted bytes could not be decoded into a credential record.
///
/// Corruption is fatal to the operation that hit it: the record is never
/// silently defaulted.
#[derive(Error, Debug)]
#[error("malformed credential record bytes: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

/// A credential record could not be serialized to its persisted form.
#[derive(Error, Debug)]
#[error("credential record serialization failed: {0}")]
pub struct EncodeError(#[from] pub serde_json::Error);
