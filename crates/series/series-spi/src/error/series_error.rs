//! Series error types

use thiserror::Error;

/// Result type alias for series operations
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Errors raised when a series violates its invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Dates must be strictly increasing within one series
    #[error("Dates are not strictly increasing at index {index}")]
    NonMonotonicDates { index: usize },

    /// Operation needs at least one point
    #[error("Series is empty")]
    EmptySeries,

    /// A date string could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Cumulative counts cannot be negative
    #[error("Negative value {value} at index {index}")]
    NegativeValue { index: usize, value: f64 },
}
