//! Series Core
//!
//! Pure transforms over tagged series: grouping upstream rows, sorting,
//! deduplication, threshold filtering, day-over-day deltas, and the fixed
//! table of known-gap patches applied at ingestion.

pub mod patch;
pub mod pipeline;
pub mod transform;

// Re-export SPI types for implementations
pub use series_spi::{
    Country, Observation, Result, Series, SeriesError, SeriesGroup, SeriesSet, SeriesStep,
    TimePoint,
};

// Re-export main types
pub use patch::{GapPatch, PatchTable};
pub use pipeline::{DailyDeltaStep, DedupStep, MinValueStep, SeriesPipeline, SortStep};
pub use transform::{
    daily_delta, dedup_by_date, filter_by_group, filter_by_min_value, group_observations,
    sort_by_date, sum_by_date,
};
