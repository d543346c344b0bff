//! Series Facade
//!
//! Unified re-exports for the series domain:
//! - `series_spi` - Model types, the step contract and errors
//! - `series_core` - Transforms, pipelines and the known-gap table
//!
//! # Example
//!
//! ```rust
//! use series_facade::{daily_delta, Series, SeriesGroup, TimePoint};
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
//! let points = [1.0, 2.0, 3.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| TimePoint::new(start + chrono::Days::new(i as u64), v))
//!     .collect();
//!
//! let deltas = daily_delta(&Series::new(SeriesGroup::National, points));
//! assert_eq!(deltas.values(), vec![0.0, 1.0, 1.0]);
//! ```

// Re-export everything from SPI
pub use series_spi::*;

// Re-export core modules for direct access
pub use series_core::{patch, pipeline, transform};

pub use series_core::{
    daily_delta, dedup_by_date, filter_by_group, filter_by_min_value, group_observations,
    sort_by_date, sum_by_date, DailyDeltaStep, DedupStep, GapPatch, MinValueStep, PatchTable,
    SeriesPipeline, SortStep,
};
