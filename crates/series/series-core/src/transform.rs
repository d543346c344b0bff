//! Pure series transforms.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use series_spi::{Observation, Series, SeriesGroup, SeriesSet, TimePoint};

use crate::pipeline::SeriesPipeline;

/// Select the rows carrying `group`, in input order.
pub fn filter_by_group(observations: &[Observation], group: &SeriesGroup) -> Series {
    let points = observations
        .iter()
        .filter(|o| &o.group == group)
        .map(Observation::point)
        .collect();
    Series::new(group.clone(), points)
}

/// Drop every point with `value <= threshold`.
///
/// Used to align series on a "days since N deaths" axis before comparing
/// countries with staggered outbreak onsets.
pub fn filter_by_min_value(series: &Series, threshold: f64) -> Series {
    let points = series
        .points
        .iter()
        .filter(|p| p.value > threshold)
        .copied()
        .collect();
    Series::new(series.group.clone(), points)
}

/// Day-over-day differences; the first day has no prior day and is 0.
pub fn daily_delta(series: &Series) -> Series {
    let points = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let delta = if i == 0 {
                0.0
            } else {
                p.value - series.points[i - 1].value
            };
            TimePoint::new(p.date, delta)
        })
        .collect();
    Series::new(series.group.clone(), points)
}

/// Stable ascending sort by date.
pub fn sort_by_date(mut series: Series) -> Series {
    series.points.sort_by_key(|p| p.date);
    series
}

/// Collapse repeated dates of a sorted series, keeping the last row.
pub fn dedup_by_date(series: Series) -> Series {
    let group = series.group;
    let mut points: Vec<TimePoint> = Vec::with_capacity(series.points.len());
    for point in series.points {
        match points.last_mut() {
            Some(last) if last.date == point.date => *last = point,
            _ => points.push(point),
        }
    }
    Series::new(group, points)
}

/// Sum the rows of `group` per date.
///
/// The CSV feed reports some countries as several province rows; summing
/// them yields one national total per day.
pub fn sum_by_date(observations: &[Observation], group: &SeriesGroup) -> Series {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for o in observations.iter().filter(|o| &o.group == group) {
        *totals.entry(o.date).or_insert(0.0) += o.value;
    }
    let points = totals
        .into_iter()
        .map(|(date, value)| TimePoint::new(date, value))
        .collect();
    Series::new(group.clone(), points)
}

/// Group tagged rows into a [`SeriesSet`], each series run through
/// [`SeriesPipeline::normalize`].
pub fn group_observations(observations: &[Observation]) -> SeriesSet {
    let mut buckets: BTreeMap<SeriesGroup, Vec<TimePoint>> = BTreeMap::new();
    for o in observations {
        buckets.entry(o.group.clone()).or_default().push(o.point());
    }

    let normalize = SeriesPipeline::normalize();
    let mut set = SeriesSet::default();
    for (group, points) in buckets {
        let series = normalize.run(Series::new(group.clone(), points));
        match group {
            SeriesGroup::National => set.national = series,
            SeriesGroup::Region(name) => {
                set.regional.insert(name, series);
            }
            SeriesGroup::Country(country) => {
                set.global.insert(country, series);
            }
        }
    }
    set
}
