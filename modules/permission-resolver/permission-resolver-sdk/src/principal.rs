//! The principal model.

use uuid::Uuid;

/// `Principal` is the entity whose permissions are being checked: an
/// authenticated user, a technical account, or the anonymous visitor.
///
/// Built by the authentication layer when a session is established and
/// passed through the request lifecycle. Immutable for the duration of a
/// request; nothing in this crate persists it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Principal {
    /// Principal identifier. Absent for the anonymous principal.
    id: Option<Uuid>,
    /// Login name. Absent for the anonymous principal.
    login: Option<String>,
    /// Role names directly assigned to this principal.
    #[serde(default)]
    roles: Vec<String>,
    /// Names of the groups this principal belongs to.
    #[serde(default)]
    groups: Vec<String>,
}

impl Principal {
    /// Create a new `Principal` builder.
    #[must_use]
    pub fn builder() -> PrincipalBuilder {
        PrincipalBuilder::default()
    }

    /// The well-known anonymous principal: no identifier, no login, and
    /// empty role and group sets. Used wherever no authenticated
    /// principal is present.
    #[must_use]
    pub fn anonymous() -> Self {
        PrincipalBuilder::default().build()
    }

    /// Get the principal identifier. `None` means anonymous.
    #[must_use]
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// Get the login name.
    #[must_use]
    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    /// Whether this principal carries an identifier, i.e. was
    /// authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.id.is_some()
    }

    /// Get the directly assigned role names.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Get the group membership names.
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

#[derive(Default)]
pub struct PrincipalBuilder {
    id: Option<Uuid>,
    login: Option<String>,
    roles: Vec<String>,
    groups: Vec<String>,
}

impl PrincipalBuilder {
    #[must_use]
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn login(mut self, login: &str) -> Self {
        self.login = Some(login.to_owned());
        self
    }

    #[must_use]
    pub fn roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    #[must_use]
    pub fn groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    #[must_use]
    pub fn build(self) -> Principal {
        Principal {
            id: self.id,
            login: self.login,
            roles: self.roles,
            groups: self.groups,
        }
    }
}
