//! Controller/view helper facade.
//!
//! Thin convenience layer over [`PermissionService`] for request
//! handlers: every operation takes the current request principal when
//! one exists and substitutes the anonymous principal otherwise.

use std::sync::Arc;

use permission_resolver_sdk::{AsResourceRef, Principal, ResourceRef, roles};

use super::error::{DomainError, RequireAdminError};
use super::service::PermissionService;

/// Helper facade bound to a [`PermissionService`].
pub struct PermissionsFacade {
    svc: Arc<PermissionService>,
    anonymous: Principal,
}

fn log_failure<T>(op: &str, result: Result<T, DomainError>) -> Result<T, DomainError> {
    if let Err(e) = &result {
        tracing::error!(operation = op, error = ?e, "permission check failed");
    }
    result
}

impl PermissionsFacade {
    #[must_use]
    pub fn new(svc: Arc<PermissionService>) -> Self {
        Self {
            svc,
            anonymous: Principal::anonymous(),
        }
    }

    fn effective<'a>(&'a self, current: Option<&'a Principal>) -> &'a Principal {
        current.unwrap_or(&self.anonymous)
    }

    /// Global-role check for the current principal.
    ///
    /// # Errors
    ///
    /// - Resolver failures, see [`PermissionService::has_role`]
    pub async fn has_role(
        &self,
        current: Option<&Principal>,
        role: &str,
    ) -> Result<bool, DomainError> {
        let result = self.svc.has_role(self.effective(current), role).await;
        log_failure("has_role", result)
    }

    /// Batched component-scoped role check for the current principal.
    ///
    /// # Errors
    ///
    /// - Resolver failures, see [`PermissionService::has_role_for_components`]
    pub async fn has_role_for_components(
        &self,
        current: Option<&Principal>,
        role: &str,
        references: &[ResourceRef],
    ) -> Result<Vec<bool>, DomainError> {
        let result = self
            .svc
            .has_role_for_components(self.effective(current), role, references)
            .await;
        log_failure("has_role_for_components", result)
    }

    /// Whether the current principal is a global administrator.
    ///
    /// # Errors
    ///
    /// - Resolver failures
    pub async fn is_admin(&self, current: Option<&Principal>) -> Result<bool, DomainError> {
        self.has_role(current, roles::ADMIN).await
    }

    /// Whether the current principal administers every given component.
    ///
    /// # Errors
    ///
    /// - Resolver failures
    pub async fn is_admin_for_components(
        &self,
        current: Option<&Principal>,
        references: &[ResourceRef],
    ) -> Result<Vec<bool>, DomainError> {
        self.has_role_for_components(current, roles::ADMIN, references)
            .await
    }

    /// Whether the current principal can access the given component. The
    /// component argument is mandatory by contract: there is no global
    /// "user" role.
    ///
    /// # Errors
    ///
    /// - Resolver failures
    pub async fn is_user_for_component(
        &self,
        current: Option<&Principal>,
        reference: &ResourceRef,
    ) -> Result<bool, DomainError> {
        let result = self
            .svc
            .has_role_for_component(self.effective(current), roles::USER, reference)
            .await;
        log_failure("is_user_for_component", result)
    }

    /// Batch form of [`Self::is_user_for_component`].
    ///
    /// # Errors
    ///
    /// - Resolver failures
    pub async fn is_user_for_components(
        &self,
        current: Option<&Principal>,
        references: &[ResourceRef],
    ) -> Result<Vec<bool>, DomainError> {
        self.has_role_for_components(current, roles::USER, references)
            .await
    }

    /// Keep only the resources the current principal holds `role` on,
    /// in their original order.
    ///
    /// # Errors
    ///
    /// - Resolver failures
    pub async fn select_authorized<T: AsResourceRef>(
        &self,
        current: Option<&Principal>,
        role: &str,
        resources: Vec<T>,
    ) -> Result<Vec<T>, DomainError> {
        let references: Vec<ResourceRef> =
            resources.iter().map(AsResourceRef::as_resource_ref).collect();
        let booleans = self
            .has_role_for_components(current, role, &references)
            .await?;

        Ok(resources
            .into_iter()
            .zip(booleans)
            .filter_map(|(resource, granted)| granted.then_some(resource))
            .collect())
    }

    /// Pre-action guard: succeeds only for global administrators.
    ///
    /// # Errors
    ///
    /// - `Denied` when the current principal is not a global
    ///   administrator; mapping the signal to a redirect or 403 is the
    ///   caller's concern
    /// - `Resolver` when the check itself failed
    pub async fn require_admin(&self, current: Option<&Principal>) -> Result<(), RequireAdminError> {
        if self.is_admin(current).await? {
            Ok(())
        } else {
            Err(RequireAdminError::Denied)
        }
    }
}
