//! Dashboard error types

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors raised by UI input or an unusable series
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Filter key outside the known set
    #[error("Unknown filter '{0}'")]
    UnknownFilter(String),

    /// Scale other than linear or logarithmic
    #[error("Unknown scale '{0}'")]
    UnknownScale(String),

    /// URL fragment could not be decoded
    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    /// No point of the selected series passes the threshold
    #[error("No data for filter '{0}'")]
    EmptySeries(String),
}
