//! Source Core
//!
//! Implementations of the upstream boundary: feed parsers, a TTL response
//! cache, the HTTP series source and an in-memory source for tests and
//! offline use.

pub mod cache;
pub mod client;
pub mod feeds;
pub mod source;

// Re-export SPI types for implementations
pub use source_spi::{
    Feed, FeedObservations, GlobalRow, MergedResponse, NationalRow, RegionalRow, Result,
    SeriesSource, SourceError,
};

pub use cache::ResponseCache;
pub use client::HttpClient;
pub use feeds::{global_feed, CsseFeed, NationalFeed, PolitologueFeed, RegionalFeed};
pub use source::{assemble, HttpSeriesSource, StaticSeriesSource};
