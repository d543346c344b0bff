//! Source Service Provider Interface
//!
//! Defines the upstream data boundary:
//!
//! - [`Feed`]: parses one upstream payload into tagged observations
//! - [`SeriesSource`]: async provider of the full series set
//! - [`FeedObservations`]: raw rows of the three feeds
//! - [`MergedResponse`]: the JSON shape served to the charts
//! - [`SourceError`]: errors raised while fetching or parsing

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Feed, SeriesSource};
pub use error::{Result, SourceError};
pub use model::{FeedObservations, GlobalRow, MergedResponse, NationalRow, RegionalRow};
