//! Traits over the external auth/database backend.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Identity, Role};

/// Source of the currently signed-in identity.
///
/// Backed by the platform auth SDK. Synchronous because auth SDKs hold the
/// current session in memory.
pub trait IdentityProvider: Send + Sync {
    /// Returns the signed-in identity, or `None` when nobody is signed in.
    fn current_identity(&self) -> Option<Identity>;
}

/// Read-only view of the backend's per-user profile record.
///
/// The two reads map to the backend's `userType` and `verified` fields.
/// `Ok(None)` means the field is absent for this identity, which callers
/// treat the same as a failed lookup (fail-open routing).
#[async_trait]
pub trait RemoteProfileStore: Send + Sync {
    /// Reads the identity's role from the `userType` field.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or refuses the read.
    async fn user_role(&self, identity: &Identity) -> Result<Option<Role>>;

    /// Reads the identity's `verified` flag. Only meaningful for
    /// [`Role::ShelterOperator`] accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or refuses the read.
    async fn verification_status(&self, identity: &Identity) -> Result<Option<bool>>;
}
