//! Reusable scripted collaborators for controller integration tests.
//!
//! Each helper implements one of the external-collaborator traits with a
//! canned outcome, so tests can drive the controller through every routing
//! and search branch without a real backend.

// Each test binary compiles this module but uses a different subset of it.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use havenhub_core::profile::{Identity, IdentityProvider, ProfileError, RemoteProfileStore, Role};
use havenhub_core::search::{
    Coordinate, LocationSearchService, PlaceCategory, PlaceResult, Region, SearchError,
};
use havenhub_core::NavigationController;

/// Routes controller logs through the test harness. Safe to call from
/// every test; only the first call wins.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Identity provider that always reports the same session.
pub struct FixedIdentity(Option<Identity>);

impl FixedIdentity {
    pub fn signed_in(id: &str) -> Self {
        Self(Some(Identity::new(id)))
    }

    pub const fn signed_out() -> Self {
        Self(None)
    }
}

impl IdentityProvider for FixedIdentity {
    fn current_identity(&self) -> Option<Identity> {
        self.0.clone()
    }
}

/// Profile store with scripted role/verification outcomes and call counters.
pub struct ScriptedProfileStore {
    role: Result<Option<Role>, ProfileError>,
    verified: Result<Option<bool>, ProfileError>,
    pub role_calls: AtomicUsize,
    pub verification_calls: AtomicUsize,
}

impl ScriptedProfileStore {
    pub const fn new(
        role: Result<Option<Role>, ProfileError>,
        verified: Result<Option<bool>, ProfileError>,
    ) -> Self {
        Self {
            role,
            verified,
            role_calls: AtomicUsize::new(0),
            verification_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RemoteProfileStore for ScriptedProfileStore {
    async fn user_role(&self, _identity: &Identity) -> Result<Option<Role>, ProfileError> {
        self.role_calls.fetch_add(1, Ordering::SeqCst);
        self.role.clone()
    }

    async fn verification_status(
        &self,
        _identity: &Identity,
    ) -> Result<Option<bool>, ProfileError> {
        self.verification_calls.fetch_add(1, Ordering::SeqCst);
        self.verified.clone()
    }
}

/// Search service with per-keyword scripted responses and optional delays.
///
/// Records every region it was asked to search so tests can assert on
/// fallback-region behavior.
#[derive(Default)]
pub struct ScriptedSearchService {
    responses: HashMap<String, Result<Vec<PlaceResult>, SearchError>>,
    delays: HashMap<String, Duration>,
    pub regions_seen: Mutex<Vec<Region>>,
}

impl ScriptedSearchService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the outcome for one keyword.
    #[must_use]
    pub fn respond(mut self, keyword: &str, outcome: Result<Vec<PlaceResult>, SearchError>) -> Self {
        self.responses.insert(keyword.to_string(), outcome);
        self
    }

    /// Delays one keyword's response, for supersession tests.
    #[must_use]
    pub fn delay(mut self, keyword: &str, delay: Duration) -> Self {
        self.delays.insert(keyword.to_string(), delay);
        self
    }
}

#[async_trait]
impl LocationSearchService for ScriptedSearchService {
    async fn search(&self, region: &Region, keyword: &str) -> Result<Vec<PlaceResult>, SearchError> {
        self.regions_seen.lock().unwrap().push(*region);
        if let Some(delay) = self.delays.get(keyword) {
            tokio::time::sleep(*delay).await;
        }
        self.responses
            .get(keyword)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Builds a controller wired to the given scripted collaborators.
///
/// Takes `Arc`s so tests can keep a handle for asserting on call counters
/// and recorded regions after the controller takes ownership.
pub fn controller(
    identity: FixedIdentity,
    profiles: Arc<ScriptedProfileStore>,
    search: Arc<ScriptedSearchService>,
) -> NavigationController {
    NavigationController::new(Arc::new(identity), profiles, search)
}

/// Shorthand for a search hit.
pub fn place(name: &str, lat: f64, lon: f64, category: PlaceCategory) -> PlaceResult {
    PlaceResult {
        name: name.to_string(),
        coordinate: Coordinate::new(lat, lon),
        category,
    }
}
