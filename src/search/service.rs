//! The place search backend, as a trait.

use async_trait::async_trait;

use super::error::Result;
use super::types::{PlaceResult, Region};

/// Platform service that finds places near a region by keyword.
///
/// Implemented by the embedding app over whatever map search API the
/// platform provides. One call covers one keyword; the controller fans out
/// over keywords and merges the results into a [`SearchSession`].
///
/// [`SearchSession`]: super::SearchSession
#[async_trait]
pub trait LocationSearchService: Send + Sync {
    /// Searches for places matching `keyword` within `region`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable, rejects the query,
    /// or fails while searching. Callers treat a failed keyword as an empty
    /// contribution rather than failing the whole session.
    async fn search(&self, region: &Region, keyword: &str) -> Result<Vec<PlaceResult>>;
}
