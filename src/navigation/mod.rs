//! Screen navigation for HavenHub.
//!
//! This module is the single source of truth for which screen the app
//! shows. It provides:
//!
//! - [`Screen`]: the enumerated UI states, one of which is current
//! - [`ControllerState`]: the observable snapshot renderers consume
//! - [`NavigationController`]: the transition operations and the two
//!   asynchronous decision flows (initial-screen routing and nearby-place
//!   search aggregation)
//!
//! # Architecture
//!
//! ```text
//! NavigationController
//!     ├── IdentityProvider      (is anyone signed in?)
//!     ├── RemoteProfileStore    (role + verification lookups)
//!     └── LocationSearchService (keyword place search)
//! ```
//!
//! State lives in a watch channel; every mutation is atomic from the
//! observer's point of view and subscribers are notified after each update.
//! The renderer only observes - its sole way back into the controller is
//! calling the named operations.

mod controller;
pub mod types;

pub use controller::NavigationController;
pub use types::{ControllerState, HealthRecord, Screen};
