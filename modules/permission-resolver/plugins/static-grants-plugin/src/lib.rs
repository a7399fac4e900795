#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Grants Plugin
//!
//! A backing authorizer with a declarative, in-memory grants table, for
//! development and testing. Grants name logins directly, groups via a
//! `group:` prefix, or everyone via `*`; roles directly assigned to a
//! principal always hold globally.
//!
//! Global-role answers are cached per login and dropped again when the
//! resolver forwards a logout notification.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_grants_plugin:
//!     config:
//!       global:
//!         admin: ["simon", "group:sysadmins"]
//!         scan: ["*"]
//!       components:
//!         AU-Tpxb-iU:
//!           user: ["*"]
//!           codeviewer: ["group:dev"]
//! ```

pub mod config;
pub mod domain;

pub use config::StaticGrantsConfig;
pub use domain::Service;
