#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Permission Resolver SDK
//!
//! This crate provides the public contract for the `permission_resolver`
//! module:
//!
//! - [`Authorizer`] - Backing-authorizer trait implemented by grant stores
//! - [`Principal`] - The entity whose permissions are being checked
//! - [`ResourceRef`], [`ComponentUuidProvider`] - Component reference types
//! - [`AuthorizerError`], [`IdentifierError`] - Error types
//! - [`roles`] - Well-known role name constants
//!
//! ## Usage
//!
//! ```ignore
//! use permission_resolver_sdk::{Authorizer, Principal, ResourceRef, roles};
//!
//! let principal = Principal::builder()
//!     .id(user_id)
//!     .login("simon")
//!     .build();
//!
//! let granted = authorizer.has_role(&principal, roles::ADMIN).await?;
//! ```

pub mod api;
pub mod error;
pub mod principal;
pub mod resource;
pub mod roles;

// Re-export main types at crate root
pub use api::Authorizer;
pub use error::{AuthorizerError, IdentifierError};
pub use principal::{Principal, PrincipalBuilder};
pub use resource::{AsResourceRef, ComponentUuidProvider, ResourceRef};
