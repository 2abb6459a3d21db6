//! # Dispatch Errors
//!
//! Boundary-validation failures plus pass-through of engine errors. A
//! validation failure is detected and returned before the engine or the
//! store is touched.

use credreg_engine::EngineError;
use thiserror::Error;

/// Errors surfaced by the dispatch adapter.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The operation name is not part of the external surface.
    #[error("received unknown operation: {0}")]
    UnknownOperation(String),

    /// Wrong number of positional arguments for the operation.
    #[error("incorrect number of arguments for {operation}: expecting {expecting}")]
    ArgumentCount {
        /// The operation that was invoked.
        operation: &'static str,
        /// Human-readable expected arity ("7", "at least 2", "1").
        expecting: &'static str,
    },

    /// A positional argument failed validation.
    #[error("{position} argument must be {expected}")]
    InvalidArgument {
        /// 1-indexed ordinal of the offending argument ("1st", "2nd", ...).
        position: String,
        /// What the argument was required to be.
        expected: &'static str,
    },

    /// The engine rejected or failed the operation.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl DispatchError {
    /// A positional validation failure for the 1-indexed `position`.
    pub fn invalid_argument(position: usize, expected: &'static str) -> Self {
        Self::InvalidArgument {
            position: ordinal(position),
            expected,
        }
    }
}

/// English ordinal rendering of a 1-indexed position.
fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_rendering() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(7), "7th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(21), "21st");
    }
}
