//! Screen and controller-state types.

use serde::{Deserialize, Serialize};

use crate::search::{Coordinate, SearchSession};

/// Reference to one health topic shown on the health-detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Stable identifier of the topic.
    pub id: String,
    /// Title shown in the detail header.
    pub title: String,
    /// Short description shown under the title.
    pub summary: String,
}

impl HealthRecord {
    /// Creates a health record reference.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
        }
    }
}

/// The enumerated UI states. Exactly one is current at any time.
///
/// `HealthDetail` is the only variant that carries a payload; the payload
/// travels inside the variant, so it cannot outlive the screen it belongs
/// to and no other variant can expose a stale one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Map of nearby shelters (the home screen).
    Main,
    /// The signed-in user's profile.
    Profile,
    /// Health topics overview.
    Health,
    /// One health topic in detail.
    HealthDetail(HealthRecord),
    /// Directory of health resources.
    HealthResources,
    /// Sign-in form.
    Login,
    /// Sign-up form for standard users.
    SignUp,
    /// Sign-up form for shelter accounts.
    SignUpShelter,
    /// Shown to shelter accounts awaiting verification.
    PendingVerification,
    /// Shelter-operator dashboard.
    Shelter,
    /// Map of nearby food banks.
    Food,
    /// Anxiety-relief exercises.
    Anxiety,
}

impl Screen {
    /// The attached payload, if this screen carries one.
    ///
    /// `Some` only for [`Screen::HealthDetail`]; every other variant
    /// returns `None`.
    #[must_use]
    pub const fn payload(&self) -> Option<&HealthRecord> {
        match self {
            Self::HealthDetail(record) => Some(record),
            _ => None,
        }
    }
}

/// Everything a renderer needs to draw the app, as one observable value.
///
/// Owned by the [`NavigationController`] and published through its watch
/// channel; consumers receive cloned snapshots and never mutate state
/// directly.
///
/// [`NavigationController`]: super::NavigationController
#[derive(Debug, Clone)]
pub struct ControllerState {
    /// The screen currently shown.
    pub screen: Screen,
    /// The active (or idle) nearby-place search session.
    pub search: SearchSession,
    /// Last known device location, pushed in by the platform location
    /// service. `None` until the first fix arrives.
    pub user_location: Option<Coordinate>,
}

impl ControllerState {
    /// The state a fresh controller starts in: login screen, idle search,
    /// no location fix yet.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            screen: Screen::Login,
            search: SearchSession::idle(),
            user_location: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_present_only_on_health_detail() {
        let record = HealthRecord::new("anx-1", "Anxiety", "Grounding exercises");
        let detail = Screen::HealthDetail(record.clone());
        assert_eq!(detail.payload(), Some(&record));

        for screen in [
            Screen::Main,
            Screen::Profile,
            Screen::Health,
            Screen::HealthResources,
            Screen::Login,
            Screen::SignUp,
            Screen::SignUpShelter,
            Screen::PendingVerification,
            Screen::Shelter,
            Screen::Food,
            Screen::Anxiety,
        ] {
            assert!(screen.payload().is_none(), "{screen:?} must carry no payload");
        }
    }

    #[test]
    fn health_detail_serializes_with_payload() {
        let screen = Screen::HealthDetail(HealthRecord::new("a", "Asthma", "Inhaler basics"));
        let json = serde_json::to_string(&screen).unwrap();
        assert!(json.contains("Asthma"));

        let back: Screen = serde_json::from_str(&json).unwrap();
        assert_eq!(back, screen);
    }

    #[test]
    fn initial_state_is_login_and_idle() {
        let state = ControllerState::initial();
        assert_eq!(state.screen, Screen::Login);
        assert!(state.search.keywords.is_empty());
        assert!(state.user_location.is_none());
    }
}
