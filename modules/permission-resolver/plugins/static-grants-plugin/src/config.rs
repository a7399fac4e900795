//! Configuration for the static grants plugin.

use std::collections::HashMap;

use serde::Deserialize;

/// Plugin configuration: the grants table.
///
/// Grant entries are matched against a principal in three ways:
/// - `*` matches every principal, the anonymous one included;
/// - `group:<name>` matches principals belonging to the group;
/// - anything else is compared to the principal's login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticGrantsConfig {
    /// Global grants: role name to grant entries.
    pub global: HashMap<String, Vec<String>>,

    /// Component-scoped grants: component uuid to role name to grant
    /// entries. Component uuids without an entry deny every role.
    pub components: HashMap<String, HashMap<String, Vec<String>>>,
}
