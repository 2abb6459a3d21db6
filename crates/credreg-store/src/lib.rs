//! # credreg-store — Key-Value Store Contract
//!
//! The registry treats its ledger as an external collaborator reached
//! through a minimal get/put contract. This crate defines that contract
//! as the [`KvStore`] trait and ships two implementations:
//!
//! - [`MemoryStore`] — a `BTreeMap`-backed store for tests and demos.
//! - [`JsonFileStore`] — a single JSON document on disk, loaded on open
//!   and written through on every put; backs the CLI.
//!
//! ## Contract
//!
//! `get` returning `Ok(None)` means the key is absent, which is a valid
//! result — distinct from `Err(StoreError)`, which means the backend
//! itself failed. Callers must never conflate the two.

pub mod error;
pub mod file;
pub mod kv;

// Re-export primary types for ergonomic imports.
pub use error::StoreError;
pub use file::JsonFileStore;
pub use kv::{KvStore, MemoryStore};
