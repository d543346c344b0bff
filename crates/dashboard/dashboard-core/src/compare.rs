//! Cross-country comparison chart.
//!
//! Every series is cut to the days above the threshold, so day 1 is the
//! first day past it for each country and outbreaks of different onset line
//! up.

use dashboard_spi::{CompareView, Dataset, Scale};
use series_core::filter_by_min_value;
use series_spi::{Series, SeriesSet};

use crate::axis::axis_spec;

/// Shortest aligned series worth drawing.
pub const MIN_COMPARE_POINTS: usize = 3;

pub const ITALY_KEY: &str = "italy";
pub const ITALY_LABEL: &str = "Italy";

/// Italy plus every country of the global feed, largest last value first.
pub fn compare_view(set: &SeriesSet, threshold: f64) -> CompareView {
    let mut entries: Vec<(String, String, Series)> = Vec::with_capacity(set.global.len() + 1);
    entries.push((
        ITALY_KEY.to_string(),
        ITALY_LABEL.to_string(),
        filter_by_min_value(&set.national, threshold),
    ));
    for (country, series) in &set.global {
        entries.push((
            slug(country.csse_name()),
            country.to_string(),
            filter_by_min_value(series, threshold),
        ));
    }

    entries.retain(|(_, _, series)| series.len() >= MIN_COMPARE_POINTS);
    entries.sort_by(|a, b| last_value(&b.2).total_cmp(&last_value(&a.2)));

    let days = entries.iter().map(|(_, _, s)| s.len()).max().unwrap_or(0);
    let datasets = entries
        .into_iter()
        .map(|(key, label, series)| {
            Dataset::new(&key, &label, series.values().into_iter().map(Some).collect())
        })
        .collect();

    CompareView {
        labels: (1..=days).map(|day| day.to_string()).collect(),
        datasets,
        axis: axis_spec(Scale::Logarithmic, 0.0),
    }
}

/// `"Korea, South"` → `"korea-south"`.
fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn last_value(series: &Series) -> f64 {
    series.last().map_or(0.0, |p| p.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use series_spi::{Country, Observation, SeriesGroup};

    fn rows(group: SeriesGroup, values: &[f64]) -> Vec<Observation> {
        let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Observation::new(start + chrono::Days::new(i as u64), v, group.clone()))
            .collect()
    }

    fn set() -> SeriesSet {
        let mut all = rows(SeriesGroup::National, &[10.0, 20.0, 40.0, 80.0, 160.0]);
        all.extend(rows(
            SeriesGroup::Country(Country::Spain),
            &[16.0, 30.0, 60.0, 200.0, 400.0, 800.0],
        ));
        all.extend(rows(SeriesGroup::Country(Country::Iran), &[5.0, 16.0, 17.0]));
        all.extend(rows(SeriesGroup::Country(Country::SouthKorea), &[1.0, 2.0, 3.0]));
        series_core::group_observations(&all)
    }

    #[test]
    fn test_sorted_by_last_value() {
        let view = compare_view(&set(), 15.0);
        let keys: Vec<&str> = view.datasets.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["spain", "italy"]);
    }

    #[test]
    fn test_short_series_dropped() {
        let view = compare_view(&set(), 15.0);
        // Iran has two points above 15, South Korea none
        assert!(view.datasets.iter().all(|d| d.label != "Iran"));
        assert!(view.datasets.iter().all(|d| d.label != "Korea, South"));
    }

    #[test]
    fn test_labels_cover_longest_series() {
        let view = compare_view(&set(), 15.0);
        assert_eq!(view.labels, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(view.datasets[0].data.len(), 6);
        assert_eq!(view.datasets[1].data.len(), 4);
    }

    #[test]
    fn test_log_axis() {
        let view = compare_view(&set(), 15.0);
        assert_eq!(view.axis.scale, Scale::Logarithmic);
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Korea, South"), "korea-south");
        assert_eq!(slug("United Kingdom"), "united-kingdom");
        assert_eq!(slug("US"), "us");
    }

    #[test]
    fn test_empty_set() {
        let view = compare_view(&SeriesSet::default(), 15.0);
        assert!(view.labels.is_empty());
        assert!(view.datasets.is_empty());
    }
}
