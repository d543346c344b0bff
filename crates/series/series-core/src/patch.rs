//! Known-gap patches
//!
//! Some upstream rows are known to be missing or wrong for specific
//! `(series, date)` pairs. The table is applied exactly once, at ingestion,
//! before any other transform.

use chrono::NaiveDate;

use series_spi::{Observation, SeriesGroup};

/// `(year, month, day, value)`
type PatchRow = (i32, u32, u32, f64);

/// Rows the national feed omits: it starts on 2020-02-24, after the first
/// three recorded deaths.
const NATIONAL_GAPS: &[PatchRow] = &[(2020, 2, 21, 1.0), (2020, 2, 22, 2.0), (2020, 2, 23, 3.0)];

/// Corrected value for one `(series, date)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GapPatch {
    pub group: SeriesGroup,
    pub date: NaiveDate,
    pub value: f64,
}

impl GapPatch {
    pub fn new(group: SeriesGroup, date: NaiveDate, value: f64) -> Self {
        Self { group, date, value }
    }
}

/// Ordered table of patches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchTable {
    patches: Vec<GapPatch>,
}

impl PatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed table of known upstream gaps.
    pub fn known_gaps() -> Self {
        NATIONAL_GAPS
            .iter()
            .filter_map(|&(y, m, d, value)| {
                NaiveDate::from_ymd_opt(y, m, d)
                    .map(|date| GapPatch::new(SeriesGroup::National, date, value))
            })
            .fold(Self::new(), Self::with)
    }

    /// Builder-style append.
    pub fn with(mut self, patch: GapPatch) -> Self {
        self.patches.push(patch);
        self
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GapPatch> {
        self.patches.iter()
    }

    /// Overwrite matching rows, insert the missing ones.
    ///
    /// An inserted row goes before the first later row of the same series,
    /// so an already date-ordered feed stays ordered.
    pub fn apply(&self, mut observations: Vec<Observation>) -> Vec<Observation> {
        for patch in &self.patches {
            if let Some(row) = observations
                .iter_mut()
                .find(|o| o.group == patch.group && o.date == patch.date)
            {
                tracing::debug!(group = %patch.group, date = %patch.date, "overriding upstream row");
                row.value = patch.value;
                continue;
            }

            let row = Observation::new(patch.date, patch.value, patch.group.clone());
            let position = observations
                .iter()
                .position(|o| o.group == patch.group && o.date > patch.date);
            tracing::debug!(group = %patch.group, date = %patch.date, "inserting missing row");
            match position {
                Some(index) => observations.insert(index, row),
                None => observations.push(row),
            }
        }
        observations
    }
}
