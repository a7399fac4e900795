//! Domain service for the permission resolver.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use permission_resolver_sdk::{Authorizer, Principal, ResourceRef};

use super::error::DomainError;
use super::identity::component_uuid_for;
use super::policy::default_global_access;
use crate::config::PermissionResolverConfig;

/// Permission resolution service.
///
/// Holds the backing [`Authorizer`] injected at the composition root and
/// the resolver configuration. One instance serves the whole process;
/// every evaluation is a sequential awaited call chain with no internal
/// fan-out.
pub struct PermissionService {
    authorizer: Arc<dyn Authorizer>,
    config: PermissionResolverConfig,
}

impl PermissionService {
    #[must_use]
    pub fn new(authorizer: Arc<dyn Authorizer>, config: PermissionResolverConfig) -> Self {
        Self { authorizer, config }
    }

    /// Global-role check: no component context.
    ///
    /// Roles registered as global permissions are delegated to the
    /// backing authorizer. Any other role falls back to the
    /// default-global-access policy; the component path is never touched
    /// here.
    ///
    /// # Errors
    ///
    /// - Backing authorizer failures
    #[tracing::instrument(skip_all, fields(role = %role))]
    pub async fn has_role(&self, principal: &Principal, role: &str) -> Result<bool, DomainError> {
        if self.config.is_global_permission(role) {
            return Ok(self.authorizer.has_role(principal, role).await?);
        }

        Ok(default_global_access(
            self.config.force_authentication,
            principal.is_authenticated(),
        ))
    }

    /// Component-scoped check for a single reference.
    ///
    /// # Errors
    ///
    /// - `Identifier` errors when the reference is malformed
    /// - Backing authorizer failures
    pub async fn has_role_for_component(
        &self,
        principal: &Principal,
        role: &str,
        reference: &ResourceRef,
    ) -> Result<bool, DomainError> {
        let mut result = self
            .has_role_for_components(principal, role, std::slice::from_ref(reference))
            .await?;
        Ok(result.pop().unwrap_or(true))
    }

    /// Component-scoped check for an ordered batch of references.
    ///
    /// Returns one boolean per reference, positionally aligned with the
    /// input. The backing authorizer is queried exactly once, with the
    /// unique component uuids of the batch; deduplication reduces calls
    /// but never changes outcomes.
    ///
    /// # Errors
    ///
    /// - `Identifier` errors abort the whole batch: a malformed
    ///   reference anywhere in the input yields no partial result
    /// - Backing authorizer failures
    #[tracing::instrument(skip_all, fields(role = %role, batch_len = references.len()))]
    pub async fn has_role_for_components(
        &self,
        principal: &Principal,
        role: &str,
        references: &[ResourceRef],
    ) -> Result<Vec<bool>, DomainError> {
        if references.is_empty() {
            return Ok(Vec::new());
        }

        let component_uuids = references
            .iter()
            .map(component_uuid_for)
            .collect::<Result<Vec<_>, _>>()?;

        let compacted = compact(&component_uuids);

        let granted_by_uuid = if compacted.is_empty() {
            HashMap::new()
        } else {
            let booleans = self
                .authorizer
                .has_role_for_components(principal, role, &compacted)
                .await?;
            compacted.into_iter().zip(booleans).collect()
        };

        Ok(expand(&component_uuids, &granted_by_uuid))
    }

    /// Forward a logout notification to the backing authorizer so it can
    /// drop any per-principal state.
    ///
    /// # Errors
    ///
    /// - Backing authorizer failures
    pub async fn on_logout(&self, principal: &Principal) -> Result<(), DomainError> {
        self.authorizer.on_logout(principal).await?;
        Ok(())
    }
}

/// Drop absent uuids and deduplicate, preserving first-seen order.
fn compact(component_uuids: &[Option<String>]) -> Vec<String> {
    let mut seen = HashSet::new();
    component_uuids
        .iter()
        .flatten()
        .filter(|uuid| seen.insert(uuid.as_str()))
        .cloned()
        .collect()
}

/// Re-expand the deduplicated answer to the original positional shape.
fn expand(component_uuids: &[Option<String>], granted_by_uuid: &HashMap<String, bool>) -> Vec<bool> {
    component_uuids
        .iter()
        .map(|uuid| {
            match uuid.as_ref().and_then(|uuid| granted_by_uuid.get(uuid)) {
                Some(granted) => *granted,
                None => {
                    // Authorization is sometimes not checked at all (for
                    // example on libraries), so positions with no uuid to
                    // check default to authorized. Intentional fail-open.
                    tracing::debug!(uuid = ?uuid, "no uuid to check, defaulting to authorized");
                    true
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn compact_drops_absents_and_deduplicates_in_first_seen_order() {
        let uuids = vec![
            Some("B".to_owned()),
            None,
            Some("A".to_owned()),
            Some("B".to_owned()),
            None,
        ];

        assert_eq!(compact(&uuids), vec!["B".to_owned(), "A".to_owned()]);
    }

    #[test]
    fn expand_replays_the_answer_per_position() {
        let uuids = vec![
            Some("A".to_owned()),
            Some("B".to_owned()),
            Some("A".to_owned()),
        ];
        let granted: HashMap<String, bool> =
            [("A".to_owned(), true), ("B".to_owned(), false)].into();

        assert_eq!(expand(&uuids, &granted), vec![true, false, true]);
    }

    #[test]
    fn expand_defaults_to_authorized_for_absent_or_unanswered_uuids() {
        let uuids = vec![None, Some("ghost".to_owned())];
        let granted = HashMap::new();

        assert_eq!(expand(&uuids, &granted), vec![true, true]);
    }
}
