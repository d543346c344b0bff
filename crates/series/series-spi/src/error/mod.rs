//! Error types for series operations

mod series_error;

pub use series_error::{Result, SeriesError};
