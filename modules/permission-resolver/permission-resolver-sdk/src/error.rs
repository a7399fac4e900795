//! Error types for the permission resolver contract.

use thiserror::Error;

/// Errors that can occur when calling a backing authorizer.
///
/// These represent infrastructure/transport failures only.
/// Denied access is expressed through boolean results,
/// not as an error variant.
#[derive(Debug, Error)]
pub enum AuthorizerError {
    /// The backing authorizer is not available yet.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors raised while canonicalizing a component reference.
///
/// Both variants signal a caller-side contract violation, not a runtime
/// authorization outcome: a malformed reference aborts the whole batch
/// evaluation instead of producing a per-element result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// Legacy numeric component ids are rejected; callers must migrate
    /// to component uuids.
    #[error("component id {0} is no longer supported for authorization checks, use the component uuid")]
    UnsupportedLegacyId(i64),

    /// The reference has no known conversion to a component uuid.
    #[error("a {kind} value can not be converted to a component uuid")]
    Unresolvable {
        /// Rough description of the offending value's shape.
        kind: &'static str,
    },
}
