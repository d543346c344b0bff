//! All series available to one session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Country, Series, SeriesGroup};

/// National, regional and per-country series fetched at startup.
///
/// Treated as immutable for the rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub national: Series,
    pub regional: BTreeMap<String, Series>,
    pub global: BTreeMap<Country, Series>,
}

impl Default for SeriesSet {
    fn default() -> Self {
        Self {
            national: Series::empty(SeriesGroup::National),
            regional: BTreeMap::new(),
            global: BTreeMap::new(),
        }
    }
}

impl SeriesSet {
    /// Series for a tag, if present.
    pub fn get(&self, group: &SeriesGroup) -> Option<&Series> {
        match group {
            SeriesGroup::National => Some(&self.national),
            SeriesGroup::Region(name) => self.regional.get(name),
            SeriesGroup::Country(country) => self.global.get(country),
        }
    }

    /// Every series in the set, national first.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        std::iter::once(&self.national)
            .chain(self.regional.values())
            .chain(self.global.values())
    }
}
