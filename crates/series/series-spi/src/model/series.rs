//! Ordered, tagged sequence of observations.

use serde::{Deserialize, Serialize};

use super::{SeriesGroup, TimePoint};
use crate::error::{Result, SeriesError};

/// A tagged time series.
///
/// The position of a point in `points` is its day number: point `i` (0-based)
/// has regression x-coordinate `i + 1`. Calendar gaps are not filled, so the
/// index and not the date is the regression axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub group: SeriesGroup,
    pub points: Vec<TimePoint>,
}

impl Series {
    /// Create a new Series without checking invariants.
    pub fn new(group: SeriesGroup, points: Vec<TimePoint>) -> Self {
        Self { group, points }
    }

    /// Create an empty series for a tag.
    pub fn empty(group: SeriesGroup) -> Self {
        Self::new(group, Vec::new())
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values in order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Last observed point.
    pub fn last(&self) -> Option<&TimePoint> {
        self.points.last()
    }

    /// Check that dates are strictly increasing and values non-negative.
    pub fn validate(&self) -> Result<()> {
        for (index, point) in self.points.iter().enumerate() {
            if point.value < 0.0 {
                return Err(SeriesError::NegativeValue {
                    index,
                    value: point.value,
                });
            }
            if index > 0 && self.points[index - 1].date >= point.date {
                return Err(SeriesError::NonMonotonicDates { index });
            }
        }
        Ok(())
    }

    /// `(day number, value)` pairs with 1-based day numbers.
    pub fn regression_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| ((i + 1) as f64, p.value))
            .collect()
    }

    /// The first `k` regression points, `k` clamped to the series length.
    pub fn training_prefix(&self, k: usize) -> Vec<(f64, f64)> {
        let mut points = self.regression_points();
        points.truncate(k.min(self.len()));
        points
    }
}
