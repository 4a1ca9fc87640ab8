//! Nearby-place search for HavenHub.
//!
//! Provides the geographic primitives and the session model used when the
//! app searches for resources (shelters, food banks, health centers) around
//! a map region:
//!
//! - [`Region`]: a map viewport (center plus span)
//! - [`PlaceResult`]: one search hit with its coordinate and category
//! - [`SearchSession`]: the accumulating result set for one logical search
//! - [`LocationSearchService`]: the platform search backend, as a trait
//!
//! A session is scoped to a single "find nearby" action. Keyword searches
//! within it run concurrently and append results as they resolve; results
//! from a superseded session are discarded rather than mixed into the
//! current one.

mod error;
mod service;
pub mod types;

pub use error::{Result, SearchError};
pub use service::LocationSearchService;
pub use types::{
    Coordinate, PlaceCategory, PlaceResult, Region, SearchSession, SearchStatus, Span,
};
