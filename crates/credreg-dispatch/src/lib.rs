//! # credreg-dispatch — Operation Dispatch Adapter
//!
//! The boundary between an external caller speaking the registry's
//! string-argument surface and the typed transition engine. An incoming
//! `(operation, args)` pair is parsed into a [`Request`] variant —
//! argument count first, then non-empty checks, then numeric parses,
//! each failure naming the offending 1-indexed position — and only then
//! routed into the engine. The adapter performs no business logic of its
//! own.
//!
//! ## External surface
//!
//! | Operation | Arguments | Success payload |
//! |---|---|---|
//! | `createDegree` | id, studentName, institutionName, durationYears, passingYear, gpa, allowedViews | none |
//! | `invokeDegreeAccess` | id, viewsDelta | none |
//! | `viewDegree` | id | serialized pre-decrement snapshot |
//! | `revokeAccess` | id | none |

pub mod error;
pub mod request;

use credreg_core::codec;
use credreg_engine::{registry, EngineError};
use credreg_store::KvStore;

// Re-export primary types for ergonomic imports.
pub use error::DispatchError;
pub use request::Request;

/// Parse an external operation and execute it against `store`.
///
/// The payload is `Some` only for `viewDegree`, carrying the serialized
/// pre-decrement record snapshot.
pub fn dispatch<S: KvStore>(
    store: &mut S,
    operation: &str,
    args: &[String],
) -> Result<Option<Vec<u8>>, DispatchError> {
    let request = Request::parse(operation, args)?;
    execute(store, request)
}

/// Execute an already-parsed request against `store`.
pub fn execute<S: KvStore>(
    store: &mut S,
    request: Request,
) -> Result<Option<Vec<u8>>, DispatchError> {
    match request {
        Request::CreateDegree(new) => {
            registry::create(store, new)?;
            Ok(None)
        }
        Request::InvokeDegreeAccess { id, views_delta } => {
            registry::grant_views(store, id, views_delta)?;
            Ok(None)
        }
        Request::ViewDegree { id } => {
            let snapshot = registry::view_and_decrement(store, id)?;
            let payload = codec::encode(&snapshot).map_err(EngineError::from)?;
            Ok(Some(payload))
        }
        Request::RevokeAccess { id } => {
            registry::revoke(store, id)?;
            Ok(None)
        }
    }
}
