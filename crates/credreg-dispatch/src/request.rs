//! # Typed Operation Requests
//!
//! One variant per external operation. Parsing a name plus positional
//! string arguments into a [`Request`] is the only place the registry
//! deals in untyped strings; past this point every argument is already
//! the right type.
//!
//! Validation order per operation: argument count, then non-empty
//! checks, then numeric parses. The first failure wins and is reported
//! against its 1-indexed position.

use credreg_core::DegreeId;
use credreg_engine::NewDegree;

use crate::error::DispatchError;

/// Operation name for creating a degree record.
pub const OP_CREATE_DEGREE: &str = "createDegree";
/// Operation name for granting additional views.
pub const OP_INVOKE_DEGREE_ACCESS: &str = "invokeDegreeAccess";
/// Operation name for viewing a degree (consumes one view).
pub const OP_VIEW_DEGREE: &str = "viewDegree";
/// Operation name for revoking all remaining views.
pub const OP_REVOKE_ACCESS: &str = "revokeAccess";

/// A parsed external operation.
#[derive(Debug, Clone)]
pub enum Request {
    /// `createDegree` — insert a new record.
    CreateDegree(NewDegree),
    /// `invokeDegreeAccess` — additive top-up of the view counter.
    InvokeDegreeAccess {
        /// Target record.
        id: DegreeId,
        /// Signed number of views to add.
        views_delta: i64,
    },
    /// `viewDegree` — consume one view, returning the snapshot.
    ViewDegree {
        /// Target record.
        id: DegreeId,
    },
    /// `revokeAccess` — force the view counter to zero.
    RevokeAccess {
        /// Target record.
        id: DegreeId,
    },
}

impl Request {
    /// Parse an operation name and its positional string arguments.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownOperation`] for an unrecognized name;
    /// [`DispatchError::ArgumentCount`] or
    /// [`DispatchError::InvalidArgument`] when the arguments do not fit
    /// the operation. The engine is never consulted here.
    pub fn parse(operation: &str, args: &[String]) -> Result<Self, DispatchError> {
        match operation {
            OP_CREATE_DEGREE => parse_create(args),
            OP_INVOKE_DEGREE_ACCESS => parse_grant(args),
            OP_VIEW_DEGREE => Ok(Self::ViewDegree {
                id: parse_id(args, OP_VIEW_DEGREE)?,
            }),
            OP_REVOKE_ACCESS => Ok(Self::RevokeAccess {
                id: parse_id(args, OP_REVOKE_ACCESS)?,
            }),
            other => Err(DispatchError::UnknownOperation(other.to_string())),
        }
    }
}

// Args: id, studentName, institutionName, durationYears, passingYear, gpa, allowedViews
//        1       2              3               4             5        6        7
fn parse_create(args: &[String]) -> Result<Request, DispatchError> {
    if args.len() != 7 {
        return Err(DispatchError::ArgumentCount {
            operation: OP_CREATE_DEGREE,
            expecting: "7",
        });
    }
    for (i, arg) in args.iter().enumerate() {
        if arg.is_empty() {
            return Err(DispatchError::invalid_argument(i + 1, "a non-empty string"));
        }
    }

    Ok(Request::CreateDegree(NewDegree {
        id: parse_int(&args[0], 1)?,
        student_name: args[1].clone(),
        institution_name: args[2].clone(),
        duration_years: parse_int(&args[3], 4)?,
        passing_year: parse_int(&args[4], 5)?,
        gpa: parse_float(&args[5], 6)?,
        initial_views: parse_int(&args[6], 7)?,
    }))
}

// Args: id, viewsDelta — extra arguments are tolerated and ignored.
fn parse_grant(args: &[String]) -> Result<Request, DispatchError> {
    if args.len() < 2 {
        return Err(DispatchError::ArgumentCount {
            operation: OP_INVOKE_DEGREE_ACCESS,
            expecting: "at least 2",
        });
    }
    Ok(Request::InvokeDegreeAccess {
        id: parse_int(&args[0], 1)?,
        views_delta: parse_int(&args[1], 2)?,
    })
}

fn parse_id(args: &[String], operation: &'static str) -> Result<DegreeId, DispatchError> {
    if args.len() != 1 {
        return Err(DispatchError::ArgumentCount {
            operation,
            expecting: "1",
        });
    }
    parse_int(&args[0], 1)
}

fn parse_int<T: std::str::FromStr>(arg: &str, position: usize) -> Result<T, DispatchError> {
    arg.parse()
        .map_err(|_| DispatchError::invalid_argument(position, "a numeric string"))
}

fn parse_float(arg: &str, position: usize) -> Result<f32, DispatchError> {
    arg.parse()
        .map_err(|_| DispatchError::invalid_argument(position, "a decimal string"))
}

// ─── Tests ───────────────────────────────────────────────────────────
