//! The navigation controller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, warn};
use tokio::sync::watch;

use crate::profile::{Identity, IdentityProvider, RemoteProfileStore, Role};
use crate::search::{
    Coordinate, LocationSearchService, PlaceResult, Region, SearchSession, SearchStatus,
};

use super::types::{ControllerState, Screen};

/// Keyword set used when routing to the food-bank map.
const FOOD_SEARCH_KEYWORDS: [&str; 1] = ["food banks"];

/// Keyword set used when populating the home-screen shelter map.
const SHELTER_SEARCH_KEYWORDS: [&str; 1] = ["Homeless Shelters"];

/// Single source of truth for which screen the app shows.
///
/// The controller owns a [`ControllerState`] published through a watch
/// channel. Transition operations mutate that state atomically from the
/// observer's point of view; subscribers are notified after each complete
/// update and never see an intermediate value. One controller is created
/// per app session and lives for the life of the process.
///
/// Asynchronous operations suspend at every collaborator call and touch
/// controller state only through the channel, so completions arriving in
/// any order cannot interleave partial writes.
///
/// # Example
///
/// ```rust,ignore
/// use havenhub_core::NavigationController;
///
/// let controller = NavigationController::new(auth, profiles, map_search);
/// let mut screens = controller.subscribe();
///
/// // Route the signed-in identity to its landing screen.
/// controller.resolve_initial_screen().await;
///
/// // React to every state change.
/// while screens.changed().await.is_ok() {
///     render(&screens.borrow().screen);
/// }
/// ```
pub struct NavigationController {
    /// Observable state; all mutations go through `send_modify`.
    state: watch::Sender<ControllerState>,

    /// The platform auth session.
    identity: Arc<dyn IdentityProvider>,

    /// Role and verification lookups.
    profiles: Arc<dyn RemoteProfileStore>,

    /// Keyword place search.
    search: Arc<dyn LocationSearchService>,

    /// Monotonic id source for search sessions. The idle session is 0, so
    /// real sessions start at 1.
    session_counter: AtomicU64,
}

impl NavigationController {
    /// Creates a controller showing [`Screen::Login`] until
    /// [`resolve_initial_screen`](Self::resolve_initial_screen) runs.
    #[must_use]
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn RemoteProfileStore>,
        search: Arc<dyn LocationSearchService>,
    ) -> Self {
        let (state, _) = watch::channel(ControllerState::initial());
        Self {
            state,
            identity,
            profiles,
            search,
            session_counter: AtomicU64::new(0),
        }
    }

    /// Returns a receiver that yields a fresh [`ControllerState`] snapshot
    /// after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ControllerState> {
        self.state.subscribe()
    }

    /// The screen currently shown.
    #[must_use]
    pub fn current_screen(&self) -> Screen {
        self.state.borrow().screen.clone()
    }

    /// Snapshot of the active (or idle) search session.
    #[must_use]
    pub fn search_session(&self) -> SearchSession {
        self.state.borrow().search.clone()
    }

    /// Last known device location, if a fix has arrived.
    #[must_use]
    pub fn user_location(&self) -> Option<Coordinate> {
        self.state.borrow().user_location
    }

    /// Shows `screen`. Unconditional and last-write-wins; any payload
    /// travels inside the variant, so switching screens can never leave a
    /// stale payload behind.
    pub fn navigate_to(&self, screen: Screen) {
        debug!("navigating to {screen:?}");
        self.state.send_modify(|state| state.screen = screen);
    }

    /// Pushes a device location fix into controller state. Called by the
    /// platform location service; the controller never produces fixes.
    pub fn update_user_location(&self, location: Coordinate) {
        self.state
            .send_modify(|state| state.user_location = Some(location));
    }

    /// Returns to the login screen and clears the search session. In-flight
    /// keyword searches from the cleared session are discarded when they
    /// resolve.
    pub fn sign_out(&self) {
        debug!("signing out");
        self.state.send_modify(|state| {
            state.screen = Screen::Login;
            state.search = SearchSession::idle();
        });
    }

    /// Routes the app to its landing screen at startup.
    ///
    /// - Nobody signed in: [`Screen::Login`], no backend calls.
    /// - Role lookup fails or the role is absent/unknown: fail open to
    ///   [`Screen::Main`] as a standard user.
    /// - Standard user: [`Screen::Main`]; verification is never fetched.
    /// - Shelter operator: fetch verification. Verified accounts land on
    ///   [`Screen::Shelter`]; unverified accounts and failed lookups land
    ///   on [`Screen::PendingVerification`].
    ///
    /// The verification fetch is issued only after the role fetch resolves,
    /// and only for shelter operators. Returns the screen it routed to.
    pub async fn resolve_initial_screen(&self) -> Screen {
        let Some(identity) = self.identity.current_identity() else {
            debug!("no signed-in identity, routing to login");
            self.navigate_to(Screen::Login);
            return Screen::Login;
        };

        let screen = match self.fetch_role(&identity).await {
            Role::StandardUser => Screen::Main,
            Role::ShelterOperator => self.fetch_shelter_screen(&identity).await,
        };

        debug!("initial screen for {identity}: {screen:?}");
        self.navigate_to(screen.clone());
        screen
    }

    /// Starts a new search session over `keywords` and drives it to
    /// completion.
    ///
    /// Prior results are cleared up front. One search is issued per keyword
    /// and they run concurrently; each completion appends its results to
    /// the session in arrival order. A keyword that fails contributes
    /// nothing and the session still completes (partial success). If a
    /// newer session or a sign-out supersedes this one, late completions
    /// are dropped, the stale session never reaches
    /// [`SearchStatus::Complete`], and this method returns an empty list.
    ///
    /// Returns the accumulated results once every keyword has resolved.
    pub async fn search_nearby(&self, keywords: &[&str], region: Region) -> Vec<PlaceResult> {
        let session_id = self.session_counter.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("search session {session_id} starting for {keywords:?}");
        self.state
            .send_modify(|state| state.search = SearchSession::begin(session_id, keywords));

        let mut pending: FuturesUnordered<_> = keywords
            .iter()
            .map(|keyword| {
                let search = Arc::clone(&self.search);
                let keyword = *keyword;
                async move { (keyword, search.search(&region, keyword).await) }
            })
            .collect();

        while let Some((keyword, outcome)) = pending.next().await {
            match outcome {
                Ok(places) => self.state.send_modify(|state| {
                    if state.search.id == session_id {
                        state.search.results.extend(places);
                    } else {
                        debug!("search session {session_id} superseded, dropping {keyword:?} results");
                    }
                }),
                Err(err) => {
                    warn!("nearby search for {keyword:?} failed: {err}");
                }
            }
        }

        let mut results = Vec::new();
        self.state.send_modify(|state| {
            if state.search.id == session_id {
                state.search.status = SearchStatus::Complete;
                results = state.search.results.clone();
            }
        });
        debug!("search session {session_id} resolved with {} results", results.len());
        results
    }

    /// Searches for food banks, then shows the food-bank map.
    ///
    /// Uses the visible map region when one is supplied and the
    /// [`Region::fallback`] area otherwise. Returns the accumulated
    /// results.
    pub async fn navigate_to_food(&self, region: Option<Region>) -> Vec<PlaceResult> {
        let region = region.unwrap_or_else(Region::fallback);
        let results = self.search_nearby(&FOOD_SEARCH_KEYWORDS, region).await;
        self.navigate_to(Screen::Food);
        results
    }

    /// Searches for homeless shelters, then shows the home-screen map.
    ///
    /// Same composition as [`navigate_to_food`](Self::navigate_to_food)
    /// with the shelter keyword set and [`Screen::Main`] as the
    /// destination.
    pub async fn navigate_to_shelters(&self, region: Option<Region>) -> Vec<PlaceResult> {
        let region = region.unwrap_or_else(Region::fallback);
        let results = self.search_nearby(&SHELTER_SEARCH_KEYWORDS, region).await;
        self.navigate_to(Screen::Main);
        results
    }

    /// Resolves the identity's role, failing open to a standard user when
    /// the lookup fails or the role is absent.
    async fn fetch_role(&self, identity: &Identity) -> Role {
        match self.profiles.user_role(identity).await {
            Ok(Some(role)) => role,
            Ok(None) => {
                warn!("no role recorded for {identity}, treating as standard user");
                Role::StandardUser
            }
            Err(err) => {
                warn!("role lookup failed for {identity}: {err}, treating as standard user");
                Role::StandardUser
            }
        }
    }

    /// Resolves the landing screen for a shelter operator from its
    /// verification flag, failing toward the pending screen.
    async fn fetch_shelter_screen(&self, identity: &Identity) -> Screen {
        match self.profiles.verification_status(identity).await {
            Ok(Some(true)) => Screen::Shelter,
            Ok(Some(false) | None) => Screen::PendingVerification,
            Err(err) => {
                warn!("verification lookup failed for {identity}: {err}, routing to pending");
                Screen::PendingVerification
            }
        }
    }
}
