//! Well-known role names.
//!
//! Role names are open-ended strings; these constants only cover the roles
//! the facade layer refers to by name. Whether a role is global or
//! component-scoped is decided by the configured global-permission
//! registry, never by the name itself.

/// Administrators. Registered as a global permission by default and also
/// usable as a component-scoped role.
pub const ADMIN: &str = "admin";

/// Plain access to a component. Never global: someone counts as a user
/// when authentication is not forced, or when they are authenticated.
pub const USER: &str = "user";

/// Source-code access to a component. Same non-global semantics as
/// [`USER`].
pub const CODEVIEWER: &str = "codeviewer";
