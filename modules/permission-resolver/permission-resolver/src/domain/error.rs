//! Domain errors for the permission resolver.

use permission_resolver_sdk::{AuthorizerError, IdentifierError};

/// Internal domain errors.
///
/// Identifier errors abort the whole batch evaluation: a malformed
/// reference is a programming error upstream, not an authorization
/// outcome. Everything else the resolver decides is a boolean, never an
/// error.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error("backing authorizer call failed: {0}")]
    Authorizer(#[from] AuthorizerError),
}

/// Outcome of the admin pre-action guard.
///
/// `Denied` is a signal, not a failure of this core: mapping it to a
/// redirect or an HTTP 403 is the surrounding framework's concern.
#[derive(thiserror::Error, Debug)]
pub enum RequireAdminError {
    #[error("access denied")]
    Denied,

    #[error(transparent)]
    Resolver(#[from] DomainError),
}
