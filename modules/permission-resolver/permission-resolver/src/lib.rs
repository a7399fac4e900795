//! Permission Resolver Module
//!
//! This module turns `(principal, role, component references)` questions
//! into authorization booleans. It canonicalizes heterogeneous component
//! references, batches the unique uuids into a single call to the backing
//! [`Authorizer`](permission_resolver_sdk::Authorizer), and re-expands the
//! answer to the caller's positional shape.
//!
//! The backing authorizer is injected once at the composition root:
//!
//! ```ignore
//! let service = Arc::new(PermissionService::new(authorizer, config));
//! let permissions = PermissionsFacade::new(service);
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::PermissionResolverConfig;
pub use domain::{DomainError, PermissionService, PermissionsFacade, RequireAdminError};
