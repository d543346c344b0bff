//! Series selection for a filter.

use dashboard_spi::Filter;
use series_core::filter_by_min_value;
use series_spi::{Series, SeriesSet};

/// Death count a series must exceed before its day 1.
pub const MIN_DEATHS: f64 = 15.0;

/// The series for `filter`, cut to the days above `threshold`.
///
/// A group absent from the set yields an empty series.
pub fn active_series(set: &SeriesSet, filter: Filter, threshold: f64) -> Series {
    let group = filter.group();
    match set.get(&group) {
        Some(series) => filter_by_min_value(series, threshold),
        None => Series::empty(group),
    }
}
