//! Series step trait for composable transforms

use crate::model::Series;

/// One pure transform in a series pipeline.
///
/// Steps own no hidden state: the same input always yields the same output.
pub trait SeriesStep: Send + Sync {
    /// Transform the series
    fn apply(&self, series: Series) -> Series;

    /// Name of this step
    fn name(&self) -> &str;
}
