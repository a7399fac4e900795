//! Domain layer for the permission resolver.

pub mod error;
pub mod facade;
pub mod identity;
pub mod policy;
pub mod service;


pub use error::{DomainError, RequireAdminError};
pub use facade::PermissionsFacade;
pub use service::PermissionService;
