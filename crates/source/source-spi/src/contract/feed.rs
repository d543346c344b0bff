//! Feed parser trait definition.

use series_spi::Observation;

use crate::error::Result;

/// Parser for one upstream payload format.
///
/// Parsing is pure; fetching the body is the caller's job.
pub trait Feed: Send + Sync {
    /// Feed name, used in logs.
    fn name(&self) -> &str;

    /// Turn a raw response body into tagged rows.
    fn parse(&self, body: &str) -> Result<Vec<Observation>>;
}
