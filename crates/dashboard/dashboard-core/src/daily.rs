//! Daily deaths chart.

use dashboard_spi::{DailyView, DashboardError, Dataset, Result, UiState};
use series_core::{DailyDeltaStep, MinValueStep, SeriesPipeline};
use series_spi::{Series, SeriesSet};

use crate::labels::date_labels;

pub const DAILY_KEY: &str = "daily";
pub const DAILY_LABEL: &str = "Daily deaths";

/// Threshold cut followed by day-over-day differencing.
pub fn daily_pipeline(threshold: f64) -> SeriesPipeline {
    SeriesPipeline::new()
        .with_step(Box::new(MinValueStep::new(threshold)))
        .with_step(Box::new(DailyDeltaStep))
}

/// Day-over-day deltas of the `filter_daily` series.
///
/// Labels and data run `len + forecast` days so the x-axis lines up with the
/// cumulative chart; the forecast days carry no value.
pub fn daily_view(ui: &UiState, set: &SeriesSet, threshold: f64) -> Result<DailyView> {
    let filter = ui.filter_daily;
    let group = filter.group();
    let raw = set
        .get(&group)
        .cloned()
        .unwrap_or_else(|| Series::empty(group));
    let deltas = daily_pipeline(threshold).run(raw);
    let start = match deltas.points.first() {
        Some(point) => point.date,
        None => return Err(DashboardError::EmptySeries(filter.key().to_string())),
    };

    let len = deltas.len() + ui.forecast;
    Ok(DailyView {
        filter,
        labels: date_labels(start, len),
        dataset: Dataset::padded(DAILY_KEY, DAILY_LABEL, &deltas.values(), len),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dashboard_spi::Filter;
    use series_spi::{Observation, SeriesGroup};

    fn set() -> SeriesSet {
        let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let rows: Vec<Observation> = [10.0, 17.0, 21.0, 29.0]
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Observation::new(
                    start + chrono::Days::new(i as u64),
                    v,
                    SeriesGroup::region("Lombardia"),
                )
            })
            .collect();
        series_core::group_observations(&rows)
    }

    #[test]
    fn test_deltas_after_threshold() {
        let ui = UiState {
            filter_daily: Filter::Lombardy,
            ..UiState::default()
        };
        let view = daily_view(&ui, &set(), 15.0).unwrap();
        assert_eq!(
            view.dataset.data,
            vec![Some(0.0), Some(4.0), Some(8.0), None, None, None]
        );
        assert_eq!(view.labels.len(), 3 + 3);
        assert_eq!(view.labels[0], "2 Mar");
        assert_eq!(view.filter, Filter::Lombardy);
    }

    #[test]
    fn test_pipeline_steps() {
        assert_eq!(daily_pipeline(15.0).step_names(), vec!["min_value", "daily_delta"]);
    }

    #[test]
    fn test_missing_series_is_error() {
        assert!(matches!(
            daily_view(&UiState::default(), &set(), 15.0),
            Err(DashboardError::EmptySeries(_))
        ));
    }
}
