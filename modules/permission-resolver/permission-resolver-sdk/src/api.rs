//! Backing-authorizer trait.

use async_trait::async_trait;

use crate::error::AuthorizerError;
use crate::principal::Principal;

/// Contract implemented by backing authorizers: the pluggable components
/// that actually store and evaluate role grants.
///
/// The permission resolver is the only intended caller. One instance is
/// constructed at the composition root and injected as
/// `Arc<dyn Authorizer>`; implementations must therefore be shareable
/// across requests.
///
/// Denied access is always a `false` boolean, never an error: the error
/// type covers infrastructure failures only.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Global-scope check for one principal/role pair.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the grant store cannot be reached
    /// - `Internal` for unexpected errors
    async fn has_role(&self, principal: &Principal, role: &str) -> Result<bool, AuthorizerError>;

    /// Component-scoped check for a set of component uuids.
    ///
    /// Returns one boolean per uuid, same length and order as the input.
    /// Callers deduplicate before calling; implementations may rely on
    /// the uuids being unique but must not require it.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` if the grant store cannot be reached
    /// - `Internal` for unexpected errors
    async fn has_role_for_components(
        &self,
        principal: &Principal,
        role: &str,
        component_uuids: &[String],
    ) -> Result<Vec<bool>, AuthorizerError>;

    /// Notification that the principal logged out, so any per-principal
    /// state (caches, session grants) can be dropped. The default is a
    /// no-op for implementations that keep no such state.
    ///
    /// # Errors
    ///
    /// - `Internal` for unexpected errors
    async fn on_logout(&self, principal: &Principal) -> Result<(), AuthorizerError> {
        let _ = principal;
        Ok(())
    }
}
