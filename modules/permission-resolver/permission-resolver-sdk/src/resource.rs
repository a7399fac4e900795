//! Component references.
//!
//! Callers identify protected components in several shapes: a canonical
//! component uuid, or a domain object that knows its own uuid. Legacy
//! numeric component ids still appear in old API payloads; they are kept
//! as a distinct variant so the resolver can reject them explicitly.

use std::fmt;
use std::sync::Arc;

use crate::error::IdentifierError;

/// Capability exposed by domain objects that can be used as component
/// references (components, snapshots, ...).
pub trait ComponentUuidProvider: Send + Sync {
    /// The canonical component uuid to check authorization against, or
    /// `None` when the object has no identity of its own (for example a
    /// library). Must be stable: equal components must report equal
    /// uuids, otherwise batching would change outcomes.
    fn component_uuid_for_authorization(&self) -> Option<String>;
}

/// A caller-supplied reference to a protected component.
#[derive(Clone)]
pub enum ResourceRef {
    /// A canonical component uuid, used as-is.
    Uuid(String),
    /// A domain object carrying the component-uuid capability.
    Provider(Arc<dyn ComponentUuidProvider>),
    /// A legacy numeric component id. Unsupported; resolution fails with
    /// [`IdentifierError::UnsupportedLegacyId`].
    Legacy(i64),
}

impl ResourceRef {
    /// Build a reference from a wire-shaped JSON value.
    ///
    /// Strings become canonical uuids and integers become legacy ids
    /// (rejected later, at resolution time). Everything else has no
    /// conversion.
    ///
    /// # Errors
    ///
    /// `IdentifierError::Unresolvable` for JSON shapes with no known
    /// conversion to a component uuid.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, IdentifierError> {
        match value {
            serde_json::Value::String(s) => Ok(Self::Uuid(s.clone())),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Legacy)
                .ok_or(IdentifierError::Unresolvable {
                    kind: "fractional number",
                }),
            serde_json::Value::Null => Err(IdentifierError::Unresolvable { kind: "null" }),
            serde_json::Value::Bool(_) => Err(IdentifierError::Unresolvable { kind: "boolean" }),
            serde_json::Value::Array(_) => Err(IdentifierError::Unresolvable { kind: "array" }),
            serde_json::Value::Object(_) => Err(IdentifierError::Unresolvable { kind: "object" }),
        }
    }
}

impl fmt::Debug for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uuid(uuid) => f.debug_tuple("Uuid").field(uuid).finish(),
            Self::Provider(p) => f
                .debug_tuple("Provider")
                .field(&p.component_uuid_for_authorization())
                .finish(),
            Self::Legacy(id) => f.debug_tuple("Legacy").field(id).finish(),
        }
    }
}

impl From<String> for ResourceRef {
    #[inline]
    fn from(uuid: String) -> Self {
        Self::Uuid(uuid)
    }
}

impl From<&str> for ResourceRef {
    #[inline]
    fn from(uuid: &str) -> Self {
        Self::Uuid(uuid.to_owned())
    }
}

impl From<i64> for ResourceRef {
    #[inline]
    fn from(id: i64) -> Self {
        Self::Legacy(id)
    }
}

impl From<Arc<dyn ComponentUuidProvider>> for ResourceRef {
    #[inline]
    fn from(provider: Arc<dyn ComponentUuidProvider>) -> Self {
        Self::Provider(provider)
    }
}

/// Conversion used by filtering helpers that need to evaluate a
/// collection of domain values and hand the surviving values back to the
/// caller.
pub trait AsResourceRef {
    fn as_resource_ref(&self) -> ResourceRef;
}

impl AsResourceRef for ResourceRef {
    fn as_resource_ref(&self) -> ResourceRef {
        self.clone()
    }
}

impl AsResourceRef for String {
    fn as_resource_ref(&self) -> ResourceRef {
        ResourceRef::Uuid(self.clone())
    }
}

impl AsResourceRef for &str {
    fn as_resource_ref(&self) -> ResourceRef {
        ResourceRef::Uuid((*self).to_owned())
    }
}

impl<T: ComponentUuidProvider + 'static> AsResourceRef for Arc<T> {
    fn as_resource_ref(&self) -> ResourceRef {
        ResourceRef::Provider(Arc::clone(self) as Arc<dyn ComponentUuidProvider>)
    }
}
