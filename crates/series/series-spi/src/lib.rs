//! Series Service Provider Interface
//!
//! Defines the data model shared by every layer of the workspace:
//!
//! - [`TimePoint`]: a single daily observation
//! - [`Series`]: an ordered, tagged sequence of observations
//! - [`Observation`]: a tagged upstream row, before grouping
//! - [`SeriesSet`]: national, regional and per-country series of one session
//! - [`SeriesStep`]: one composable transform of a series
//! - [`SeriesError`]: errors raised when a series breaks its invariants

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesStep;
pub use error::{Result, SeriesError};
pub use model::{Country, Observation, Series, SeriesGroup, SeriesSet, TimePoint};
