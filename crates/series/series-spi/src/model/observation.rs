//! Tagged upstream row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{SeriesGroup, TimePoint};

/// One row of an upstream feed, tagged with the series it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
    pub group: SeriesGroup,
}

impl Observation {
    /// Create a new Observation.
    pub fn new(date: NaiveDate, value: f64, group: SeriesGroup) -> Self {
        Self { date, value, group }
    }

    /// Drop the tag.
    pub fn point(&self) -> TimePoint {
        TimePoint::new(self.date, self.value)
    }
}
