//! Identity and role types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to the authenticated user, owned by the auth backend.
///
/// The controller only checks presence or absence and passes it back to the
/// backend for field lookups; it never interprets or mutates the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Wraps a backend user id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw backend id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coarse authorization class of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// A person looking for resources.
    StandardUser,
    /// A shelter account; gated behind verification before it can manage
    /// shelter listings.
    ShelterOperator,
}

impl Role {
    /// Parses the backend's `userType` field value.
    ///
    /// Returns `None` for values the app does not recognize; callers decide
    /// how to route an unknown role.
    #[must_use]
    pub fn from_user_type(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Self::StandardUser),
            "shelter" => Some(Self::ShelterOperator),
            _ => None,
        }
    }

    /// The `userType` field value for this role.
    #[must_use]
    pub const fn as_user_type(self) -> &'static str {
        match self {
            Self::StandardUser => "user",
            Self::ShelterOperator => "shelter",
        }
    }
}
