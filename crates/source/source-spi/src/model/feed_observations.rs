//! Rows of the three upstream feeds.

use serde::{Deserialize, Serialize};
use series_spi::Observation;

/// Tagged rows of the national, regional and global feeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedObservations {
    pub national: Vec<Observation>,
    pub regional: Vec<Observation>,
    pub global: Vec<Observation>,
}

impl FeedObservations {
    pub fn new(
        national: Vec<Observation>,
        regional: Vec<Observation>,
        global: Vec<Observation>,
    ) -> Self {
        Self {
            national,
            regional,
            global,
        }
    }

    /// Total row count.
    pub fn len(&self) -> usize {
        self.national.len() + self.regional.len() + self.global.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All rows, national first.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.national
            .iter()
            .chain(self.regional.iter())
            .chain(self.global.iter())
    }

    /// Flatten into one row list, national first.
    pub fn into_rows(self) -> Vec<Observation> {
        let mut rows = self.national;
        rows.extend(self.regional);
        rows.extend(self.global);
        rows
    }
}
