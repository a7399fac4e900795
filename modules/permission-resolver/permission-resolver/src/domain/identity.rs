//! Canonicalization of component references.

use permission_resolver_sdk::{IdentifierError, ResourceRef};

/// Resolve a component reference to its canonical component uuid.
///
/// `Ok(None)` means the reference denotes something without an identity
/// of its own (a provider that reports no uuid); the caller treats such
/// entries as authorized by default instead of failing.
///
/// # Errors
///
/// `IdentifierError::UnsupportedLegacyId` for legacy numeric component
/// ids, which callers must migrate away from. The error aborts the whole
/// batch the reference appeared in.
pub fn component_uuid_for(reference: &ResourceRef) -> Result<Option<String>, IdentifierError> {
    match reference {
        ResourceRef::Uuid(uuid) => Ok(Some(uuid.clone())),
        ResourceRef::Provider(provider) => Ok(provider.component_uuid_for_authorization()),
        ResourceRef::Legacy(id) => Err(IdentifierError::UnsupportedLegacyId(*id)),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;

    use permission_resolver_sdk::ComponentUuidProvider;

    use super::*;

    struct Library;

    impl ComponentUuidProvider for Library {
        fn component_uuid_for_authorization(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn uuid_references_pass_through() {
        let uuid = component_uuid_for(&ResourceRef::Uuid("AU-1".to_owned())).unwrap();
        assert_eq!(uuid.as_deref(), Some("AU-1"));
    }

    #[test]
    fn identity_less_providers_resolve_to_absent() {
        let reference = ResourceRef::Provider(Arc::new(Library));
        assert_eq!(component_uuid_for(&reference).unwrap(), None);
    }

    #[test]
    fn legacy_ids_are_rejected() {
        let err = component_uuid_for(&ResourceRef::Legacy(30)).unwrap_err();
        assert_eq!(err, IdentifierError::UnsupportedLegacyId(30));
    }
}
