//! # Record Codec
//!
//! Lossless conversion between [`CredentialRecord`] and its persisted
//! byte encoding. The encoding is self-describing JSON carrying the
//! record's `docType` tag, so every field — including the kind tag —
//! round-trips exactly.

use crate::error::{DecodeError, EncodeError};
use crate::record::CredentialRecord;

/// Encode a record into its persisted byte form.
pub fn encode(record: &CredentialRecord) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(record)?)
}

/// Decode persisted bytes back into a record.
///
/// # Errors
///
/// Returns [`DecodeError`] on malformed or incomplete input. Missing
/// fields are an error, never defaulted.
pub fn decode(bytes: &[u8]) -> Result<CredentialRecord, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

// ─── Tests ───────────────────────────────────────────────────────────
