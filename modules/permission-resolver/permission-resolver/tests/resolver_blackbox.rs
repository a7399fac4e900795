#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end checks through the public surface only: facade and service
//! from this crate, grants evaluation from the static plugin, contract
//! types from the SDK.

use std::sync::Arc;

use permission_resolver::{
    PermissionResolverConfig, PermissionService, PermissionsFacade, RequireAdminError,
};
use permission_resolver_sdk::{ComponentUuidProvider, Principal, ResourceRef, roles};
use static_grants_plugin::{Service as StaticGrants, StaticGrantsConfig};
use uuid::Uuid;

struct Component {
    uuid: Option<String>,
}

impl ComponentUuidProvider for Component {
    fn component_uuid_for_authorization(&self) -> Option<String> {
        self.uuid.clone()
    }
}

fn grants() -> StaticGrantsConfig {
    serde_json::from_str(
        r#"{
            "global": {"admin": ["alice"]},
            "components": {
                "AU-core": {"user": ["*"], "admin": ["alice"]},
                "AU-secret": {"user": ["alice"]}
            }
        }"#,
    )
    .unwrap()
}

fn facade(force_authentication: bool) -> PermissionsFacade {
    let authorizer = Arc::new(StaticGrants::new(grants()));
    let service = PermissionService::new(
        authorizer,
        PermissionResolverConfig {
            force_authentication,
            ..PermissionResolverConfig::default()
        },
    );
    PermissionsFacade::new(Arc::new(service))
}

fn alice() -> Principal {
    Principal::builder().id(Uuid::new_v4()).login("alice").build()
}

#[tokio::test]
async fn admin_guard_and_global_checks() {
    let permissions = facade(false);

    permissions.require_admin(Some(&alice())).await.unwrap();

    let bob = Principal::builder().id(Uuid::new_v4()).login("bob").build();
    assert!(matches!(
        permissions.require_admin(Some(&bob)).await.unwrap_err(),
        RequireAdminError::Denied
    ));
    assert!(matches!(
        permissions.require_admin(None).await.unwrap_err(),
        RequireAdminError::Denied
    ));
}

#[tokio::test]
async fn anonymous_user_access_follows_force_authentication() {
    let open = facade(false);
    assert!(open.has_role(None, roles::USER).await.unwrap());

    let closed = facade(true);
    assert!(!closed.has_role(None, roles::USER).await.unwrap());
    assert!(closed.has_role(Some(&alice()), roles::USER).await.unwrap());
}

#[tokio::test]
async fn batched_component_checks_mix_grants_and_fail_open_defaults() {
    let permissions = facade(false);

    let references = vec![
        ResourceRef::from("AU-core"),
        ResourceRef::from("AU-secret"),
        // A library without identity: authorized by default.
        ResourceRef::Provider(Arc::new(Component { uuid: None })),
        ResourceRef::Provider(Arc::new(Component {
            uuid: Some("AU-core".to_owned()),
        })),
    ];

    let anonymous = permissions
        .is_user_for_components(None, &references)
        .await
        .unwrap();
    assert_eq!(anonymous, vec![true, false, true, true]);

    let for_alice = permissions
        .is_user_for_components(Some(&alice()), &references)
        .await
        .unwrap();
    assert_eq!(for_alice, vec![true, true, true, true]);
}

#[tokio::test]
async fn select_authorized_filters_component_uuids() {
    let permissions = facade(false);

    let selected = permissions
        .select_authorized(
            None,
            roles::USER,
            vec!["AU-core".to_owned(), "AU-secret".to_owned()],
        )
        .await
        .unwrap();

    assert_eq!(selected, vec!["AU-core".to_owned()]);
}

#[tokio::test]
async fn legacy_ids_fail_the_whole_request() {
    let permissions = facade(false);

    let references = vec![ResourceRef::from("AU-core"), ResourceRef::from(30_i64)];
    let result = permissions
        .is_user_for_components(Some(&alice()), &references)
        .await;

    assert!(result.is_err());
}
