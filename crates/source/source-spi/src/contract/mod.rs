//! Contracts for upstream feeds and series providers.

mod feed;
mod series_source;

pub use feed::Feed;
pub use series_source::SeriesSource;
