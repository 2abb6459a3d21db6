//! # credreg-core — Foundational Types for the Credential Access Registry
//!
//! This crate is the leaf of the workspace DAG. It defines the credential
//! record entity, the identifier newtype with its canonical store-key
//! mapping, and the codec between the in-memory record and its persisted
//! byte form. Every other crate in the workspace depends on `credreg-core`;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifier.** `DegreeId` wraps the caller-supplied integer
//!    id; store keys are produced only through `DegreeId::store_key()`, so
//!    two distinct ids can never collide under the mapping.
//!
//! 2. **Wire-stable persisted form.** The persisted JSON field names
//!    (`docType`, `degreeid`, `studentname`, ...) are fixed through serde
//!    renames and never drift from the Rust field names.
//!
//! 3. **Normalization at construction.** `CredentialRecord::new()` is the
//!    only constructor; it lowercases the name fields and pins the record
//!    kind tag, so no un-normalized record can be built.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `credreg-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod codec;
pub mod error;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use codec::{decode, encode};
pub use error::{DecodeError, EncodeError};
pub use record::{CredentialRecord, DegreeId, RECORD_KIND};
