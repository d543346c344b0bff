//! Source Facade
//!
//! Unified re-exports for the upstream data boundary:
//! - `source_spi` - Feed and source contracts, merged response, errors
//! - `source_api` - Configuration types and builders
//! - `source_core` - Parsers, cache and sources
//!
//! # Example
//!
//! ```rust,no_run
//! use source_facade::{HttpSeriesSource, SeriesSource, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = HttpSeriesSource::new(SourceConfig::default()).unwrap();
//!     let set = source.fetch_all_series().await.unwrap();
//!     println!("national series: {} days", set.national.len());
//! }
//! ```

// Re-export everything from SPI
pub use source_spi::*;

// Re-export everything from API
pub use source_api::*;

// Re-export everything from Core
pub use source_core::{
    assemble, cache, client, feeds, global_feed, source, CsseFeed, HttpClient, HttpSeriesSource,
    NationalFeed, PolitologueFeed, RegionalFeed, ResponseCache, StaticSeriesSource,
};
