//! Configuration for the permission resolver.

use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PermissionResolverConfig {
    /// When `true`, anonymous visitors hold no implicit global access:
    /// only authenticated principals count as users/codeviewers.
    pub force_authentication: bool,

    /// The global-permission registry: role names evaluated without any
    /// component context. Role names outside this set fall back to the
    /// default-global-access policy when checked globally.
    pub global_permissions: Vec<String>,
}

impl Default for PermissionResolverConfig {
    fn default() -> Self {
        Self {
            force_authentication: false,
            global_permissions: [
                "admin",
                "gateadmin",
                "profileadmin",
                "shareDashboard",
                "scan",
                "dryRunScan",
                "provisioning",
            ]
            .map(str::to_owned)
            .to_vec(),
        }
    }
}

impl PermissionResolverConfig {
    /// Whether `role` is registered as a global permission.
    #[must_use]
    pub fn is_global_permission(&self, role: &str) -> bool {
        self.global_permissions.iter().any(|r| r == role)
    }
}
