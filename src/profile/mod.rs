//! Identity and profile lookups for HavenHub.
//!
//! The auth/database backend is external; this module defines the narrow
//! view of it the navigation controller needs at startup:
//!
//! - [`IdentityProvider`]: is anyone signed in?
//! - [`RemoteProfileStore`]: what role does the identity have, and (for
//!   shelter operators) has it been verified?
//!
//! Roles and verification flags are derived per lookup and never cached or
//! written back by this crate.

mod error;
mod store;
pub mod types;

pub use error::{ProfileError, Result};
pub use store::{IdentityProvider, RemoteProfileStore};
pub use types::{Identity, Role};
