//! Service implementation for the static grants plugin.

use std::collections::HashMap;

use dashmap::DashMap;
use permission_resolver_sdk::Principal;

use crate::config::StaticGrantsConfig;

/// Static grants service.
///
/// Evaluates role questions against the configured grants table. Global
/// answers are cached per login; the cache is dropped for a principal
/// when its logout notification arrives.
pub struct Service {
    config: StaticGrantsConfig,
    global_cache: DashMap<String, HashMap<String, bool>>,
}

fn entry_matches(principal: &Principal, entry: &str) -> bool {
    if entry == "*" {
        return true;
    }
    if let Some(group) = entry.strip_prefix("group:") {
        return principal.groups().iter().any(|g| g == group);
    }
    principal.login() == Some(entry)
}

fn entries_match(principal: &Principal, entries: &[String]) -> bool {
    entries.iter().any(|entry| entry_matches(principal, entry))
}

impl Service {
    #[must_use]
    pub fn new(config: StaticGrantsConfig) -> Self {
        Self {
            config,
            global_cache: DashMap::new(),
        }
    }

    /// Global-scope check for one principal/role pair.
    #[must_use]
    pub fn has_role(&self, principal: &Principal, role: &str) -> bool {
        if principal.roles().iter().any(|r| r == role) {
            return true;
        }

        let Some(login) = principal.login() else {
            // Anonymous principals have nothing to key a cache on.
            return self.lookup_global(principal, role);
        };

        if let Some(cached) = self
            .global_cache
            .get(login)
            .and_then(|roles| roles.get(role).copied())
        {
            return cached;
        }

        let granted = self.lookup_global(principal, role);
        self.global_cache
            .entry(login.to_owned())
            .or_default()
            .insert(role.to_owned(), granted);
        granted
    }

    /// Component-scoped check: one boolean per uuid, aligned with the
    /// input. Component uuids without a grants entry deny every role.
    #[must_use]
    pub fn has_role_for_components(
        &self,
        principal: &Principal,
        role: &str,
        component_uuids: &[String],
    ) -> Vec<bool> {
        component_uuids
            .iter()
            .map(|uuid| {
                self.config
                    .components
                    .get(uuid)
                    .and_then(|by_role| by_role.get(role))
                    .is_some_and(|entries| entries_match(principal, entries))
            })
            .collect()
    }

    /// Drop the cached global answers for a principal.
    pub fn on_logout(&self, principal: &Principal) {
        if let Some(login) = principal.login() {
            self.global_cache.remove(login);
            tracing::debug!(login, "dropped cached global roles");
        }
    }

    fn lookup_global(&self, principal: &Principal, role: &str) -> bool {
        self.config
            .global
            .get(role)
            .is_some_and(|entries| entries_match(principal, entries))
    }

    #[cfg(test)]
    fn cached_logins(&self) -> Vec<String> {
        self.global_cache
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }
}
