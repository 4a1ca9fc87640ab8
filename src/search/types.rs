//! Geographic and search-session types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point on the map in decimal degrees.
///
/// # Example
///
/// ```
/// use havenhub_core::search::Coordinate;
///
/// let columbus = Coordinate::new(39.9612, -82.9988);
/// assert_eq!(columbus.latitude, 39.9612);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees (positive is north).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive is east).
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from raw decimal degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The extent of a map viewport in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// North-south extent of the viewport.
    pub latitude_delta: f64,
    /// East-west extent of the viewport.
    pub longitude_delta: f64,
}

/// A map viewport: a center coordinate plus the visible span.
///
/// Searches are scoped to a region. When the app has no viewport yet
/// (e.g. location permission still pending), [`Region::fallback`] supplies
/// a usable default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Center of the viewport.
    pub center: Coordinate,
    /// Visible extent around the center.
    pub span: Span,
}

impl Region {
    /// Creates a region from a center and span.
    #[must_use]
    pub const fn new(center: Coordinate, span: Span) -> Self {
        Self { center, span }
    }

    /// Fallback search area centered on Columbus, Ohio, used when no map
    /// viewport is available.
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            center: Coordinate::new(39.9612, -82.9988),
            span: Span {
                latitude_delta: 0.2,
                longitude_delta: 0.2,
            },
        }
    }

    /// Returns true if the point lies within this region's extent.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        (point.latitude - self.center.latitude).abs() <= self.span.latitude_delta / 2.0
            && (point.longitude - self.center.longitude).abs() <= self.span.longitude_delta / 2.0
    }
}

/// Resource class a place belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceCategory {
    /// Homeless shelter.
    Shelter,
    /// Food bank or pantry.
    FoodBank,
    /// Health or resource center.
    HealthCenter,
    /// Anything the backend returned that fits no known class.
    Other,
}

/// One hit from the place search backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Display name of the place.
    pub name: String,
    /// Where the place is.
    pub coordinate: Coordinate,
    /// Resource class of the place.
    pub category: PlaceCategory,
}

/// Progress of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchStatus {
    /// No search has been started (or the session was cleared).
    #[default]
    Idle,
    /// At least one keyword search has not resolved yet.
    InProgress,
    /// Every keyword search has resolved, successfully or not.
    Complete,
}

/// One logical "find nearby places" operation.
///
/// A session spans one or more concurrent keyword searches over the same
/// region. Results accumulate in arrival order as individual searches
/// resolve; order carries no meaning. The `id` ties in-flight searches to
/// the session that issued them, so completions from a superseded session
/// can be recognized and dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSession {
    /// Identifier of this session; 0 is the idle (never-searched) session.
    pub id: u64,
    /// The keywords being searched.
    pub keywords: Vec<String>,
    /// Accumulated results from resolved keyword searches.
    pub results: Vec<PlaceResult>,
    /// Whether the session is idle, running, or fully resolved.
    pub status: SearchStatus,
    /// When the session was started (UTC).
    pub started_at: DateTime<Utc>,
}

impl SearchSession {
    /// Starts a fresh session for the given keywords with no results yet.
    #[must_use]
    pub fn begin(id: u64, keywords: &[&str]) -> Self {
        Self {
            id,
            keywords: keywords.iter().map(ToString::to_string).collect(),
            results: Vec::new(),
            status: SearchStatus::InProgress,
            started_at: Utc::now(),
        }
    }

    /// The idle session: no keywords, no results, nothing in flight.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            id: 0,
            keywords: Vec::new(),
            results: Vec::new(),
            status: SearchStatus::Idle,
            started_at: Utc::now(),
        }
    }

    /// Returns true once every keyword search in the session has resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Complete
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::idle()
    }
}
