//! # Registry Transitions
//!
//! The four operations of the credential registry, each a single read
//! followed by at most one write against the store passed in.
//!
//! ```text
//! create ──▶ record exists with remaining_views = initial_views
//!                  │
//!     grant_views  │  remaining_views += delta   (unclamped)
//!   view_and_decr  │  remaining_views -= 1       (requires > 0)
//!          revoke  │  remaining_views  = 0       (unconditional)
//! ```
//!
//! The id is immutable after create, and `remaining_views` is the only
//! field any later transition touches. No transition deletes a record.

use credreg_core::{codec, CredentialRecord, DegreeId};
use credreg_store::KvStore;

use crate::error::EngineError;

/// Input to [`create`]: the caller-supplied fields of a new degree
/// record, before normalization.
#[derive(Debug, Clone)]
pub struct NewDegree {
    /// Unique identifier; becomes the store key.
    pub id: DegreeId,
    /// Degree holder name, as supplied (lowercased on creation).
    pub student_name: String,
    /// Issuing institution name, as supplied (lowercased on creation).
    pub institution_name: String,
    /// Duration of the degree in years.
    pub duration_years: i64,
    /// Year the degree was awarded.
    pub passing_year: i64,
    /// Cumulative grade point average.
    pub gpa: f32,
    /// Initial value of the remaining-view counter.
    pub initial_views: i64,
}

/// Create a new degree record.
///
/// Fails with [`EngineError::AlreadyExists`] if a record is already
/// stored under the id. On success exactly one durable write occurs.
///
/// The existence check and the write are two store calls; lost updates
/// between them are prevented only by the store's own per-key
/// transaction semantics, not by this engine.
pub fn create<S: KvStore>(store: &mut S, new: NewDegree) -> Result<(), EngineError> {
    tracing::debug!(id = %new.id, "create degree");

    let key = new.id.store_key();
    if store.get(&key)?.is_some() {
        return Err(EngineError::AlreadyExists { id: new.id });
    }

    let record = CredentialRecord::new(
        new.id,
        &new.student_name,
        &new.institution_name,
        new.duration_years,
        new.passing_year,
        new.gpa,
        new.initial_views,
    );
    store.put(&key, codec::encode(&record)?)?;

    tracing::info!(id = %new.id, "degree created");
    Ok(())
}

/// Add `delta` to a record's remaining-view counter.
///
/// `delta` may be negative; no floor or ceiling is applied, so the
/// counter can be driven below zero.
pub fn grant_views<S: KvStore>(
    store: &mut S,
    id: DegreeId,
    delta: i64,
) -> Result<(), EngineError> {
    tracing::debug!(%id, delta, "grant views");

    let mut record = load(store, id)?;
    record.remaining_views += delta;
    store.put(&id.store_key(), codec::encode(&record)?)?;

    tracing::info!(%id, remaining = record.remaining_views, "views granted");
    Ok(())
}

/// Consume one view of a record, returning the pre-decrement snapshot.
///
/// Fails with [`EngineError::Forbidden`] — without writing — when the
/// counter is not strictly positive. On success the stored counter drops
/// by exactly 1, while the returned snapshot reflects the record as it
/// was at read time: the caller observes the count it was entitled to
/// consume, not the post-decrement value.
pub fn view_and_decrement<S: KvStore>(
    store: &mut S,
    id: DegreeId,
) -> Result<CredentialRecord, EngineError> {
    tracing::debug!(%id, "view degree");

    let snapshot = load(store, id)?;
    if snapshot.remaining_views <= 0 {
        return Err(EngineError::Forbidden { id });
    }

    let mut updated = snapshot.clone();
    updated.remaining_views -= 1;
    store.put(&id.store_key(), codec::encode(&updated)?)?;

    tracing::info!(%id, remaining = updated.remaining_views, "degree viewed");
    Ok(snapshot)
}

/// Force a record's remaining-view counter to zero.
///
/// Idempotent in effect: revoking an already-revoked record changes
/// nothing observable, though the write still occurs.
pub fn revoke<S: KvStore>(store: &mut S, id: DegreeId) -> Result<(), EngineError> {
    tracing::debug!(%id, "revoke access");

    let mut record = load(store, id)?;
    record.remaining_views = 0;
    store.put(&id.store_key(), codec::encode(&record)?)?;

    tracing::info!(%id, "access revoked");
    Ok(())
}

/// Read and decode the record at `id`, or fail `NotFound`.
fn load<S: KvStore>(store: &S, id: DegreeId) -> Result<CredentialRecord, EngineError> {
    let bytes = store
        .get(&id.store_key())?
        .ok_or(EngineError::NotFound { id })?;
    Ok(codec::decode(&bytes)?)
}

// ─── Tests ───────────────────────────────────────────────────────────
