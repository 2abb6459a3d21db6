//! # credreg-engine — Credential Transition Engine
//!
//! Implements the four state transitions of the Credential Access
//! Registry against the [`KvStore`](credreg_store::KvStore) contract:
//!
//! - **create** — insert a new record; refuses duplicate ids.
//! - **grant_views** — additive top-up of the remaining-view counter,
//!   unclamped in either direction.
//! - **view_and_decrement** — conditional decrement; authorized only
//!   while the counter is strictly positive, and the caller observes the
//!   pre-decrement snapshot.
//! - **revoke** — force the counter to zero, idempotently.
//!
//! ## Design
//!
//! Every operation is purely sequential read-then-write logic over a
//! store passed in explicitly per call. The engine holds no state, caches
//! nothing between invocations, and layers no locking on top of the
//! store — concurrent calls against the same id are serialized by the
//! store's own transaction ordering. Every code path resolves to exactly
//! one of the declared results; store failures propagate verbatim and
//! are never swallowed.

pub mod error;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use error::EngineError;
pub use registry::{create, grant_views, revoke, view_and_decrement, NewDegree};
