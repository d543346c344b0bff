//! Async series provider trait definition.

use async_trait::async_trait;
use series_spi::SeriesSet;

use crate::error::Result;
use crate::model::FeedObservations;

/// Provider of every series a session needs.
///
/// The result is fetched once at startup and treated as immutable afterwards.
/// Any upstream failure is fatal to that load; there is no partial mode.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one source can be shared by
/// request handlers.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Source name, used in logs.
    fn name(&self) -> &str;

    /// Tagged rows of all three feeds, patched but not yet grouped.
    async fn fetch_observations(&self) -> Result<FeedObservations>;

    /// National, regional and per-country series, sorted and deduplicated.
    async fn fetch_all_series(&self) -> Result<SeriesSet>;
}
