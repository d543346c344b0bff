//! Cumulative chart recompute.
//!
//! One pass per UI event: select the series, clamp the training window, fit
//! every model on the prefix, project to `len + h`, and lay out the chart.
//! A fitter that fails yields an empty curve, which is then dropped; the
//! chart never fails because one model could not be fitted.

use dashboard_spi::{
    Annotation, CumulativeView, DashboardError, Dataset, Result, SessionState, SliderSpec,
};
use regression_core::{project, Projection, ProjectionMode, ProjectionRequest};
use regression_spi::{CurveFitter, FitKind};
use series_spi::SeriesSet;
use tracing::{debug, warn};

use crate::axis::axis_spec;
use crate::labels::date_labels;
use crate::select::active_series;
use crate::window::TrainingWindow;

pub const OBSERVED_KEY: &str = "observed";
pub const OBSERVED_LABEL: &str = "Official deaths";
pub const LOCKDOWN_LABEL: &str = "Lockdown";

/// Recompute the cumulative chart for `state`.
///
/// Datasets come out in reverse fit order (last fitter first, observed
/// series last) so the observed line is drawn on top.
pub fn recompute(
    state: &SessionState,
    set: &SeriesSet,
    fitters: &[Box<dyn CurveFitter>],
    threshold: f64,
) -> Result<CumulativeView> {
    let filter = state.ui.filter_cumulative;
    let series = active_series(set, filter, threshold);
    let start = match series.points.first() {
        Some(point) => point.date,
        None => return Err(DashboardError::EmptySeries(filter.key().to_string())),
    };

    let len = series.len();
    let horizon = state.ui.forecast;
    let window = TrainingWindow::resolve(state.training_window, len).get();
    let training = series.training_prefix(window);
    let request = ProjectionRequest::new(window, len, horizon, ProjectionMode::BackFit);

    let projections: Vec<Projection> = fitters
        .iter()
        .map(|fitter| match fitter.fit(&training) {
            Ok(model) => project(&model, &request),
            Err(error) => {
                warn!(kind = %fitter.kind(), %error, "fit failed, curve dropped");
                Projection::empty(fitter.kind(), &request)
            }
        })
        .collect();

    let observed = series.values();
    let peak = projections
        .iter()
        .find(|p| p.kind == FitKind::Cubic)
        .and_then(|p| p.values.last().copied().flatten())
        .filter(|v| v.is_finite())
        .unwrap_or_else(|| observed.last().copied().unwrap_or(0.0));

    let mut datasets = vec![Dataset::padded(
        OBSERVED_KEY,
        OBSERVED_LABEL,
        &observed,
        request.output_len(),
    )];
    datasets.extend(
        projections
            .into_iter()
            .map(|p| Dataset::new(p.kind.key(), p.kind.label(), p.values)),
    );
    datasets.retain(|d| d.non_null_count() > 1);
    datasets.reverse();

    debug!(
        filter = %filter,
        len,
        window,
        horizon,
        curves = datasets.len(),
        "cumulative chart recomputed"
    );

    Ok(CumulativeView {
        filter,
        labels: date_labels(start, len + horizon),
        datasets,
        boundary: window,
        axis: axis_spec(state.ui.scale, peak),
        slider: slider_spec(len, horizon, window, peak),
        annotation: filter.lockdown_day().map(|day| Annotation {
            index: day.saturating_sub(1),
            label: LOCKDOWN_LABEL.to_string(),
        }),
    })
}

fn slider_spec(len: usize, horizon: usize, window: usize, peak: f64) -> SliderSpec {
    let headroom = peak * 1.5;
    let offset_px = if headroom > 10_000.0 && headroom <= 100_000.0 {
        40
    } else {
        50
    };
    SliderSpec {
        min: 1,
        max: len,
        value: window,
        width_fraction: len as f64 / (len + horizon) as f64,
        offset_px,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dashboard_spi::{Filter, Scale, UiState};
    use regression_core::standard_fitters;
    use series_spi::{Country, Observation, SeriesGroup};

    const ITALY: [f64; 14] = [
        17.0, 21.0, 29.0, 34.0, 52.0, 79.0, 107.0, 148.0, 197.0, 233.0, 366.0, 463.0, 631.0,
        827.0,
    ];

    fn set() -> SeriesSet {
        let start = NaiveDate::from_ymd_opt(2020, 2, 27).unwrap();
        let mut rows: Vec<Observation> = ITALY
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                Observation::new(start + chrono::Days::new(i as u64), v, SeriesGroup::National)
            })
            .collect();
        rows.push(Observation::new(
            start,
            20.0,
            SeriesGroup::Country(Country::Netherlands),
        ));
        series_core::group_observations(&rows)
    }

    fn state(window: Option<usize>) -> SessionState {
        SessionState {
            ui: UiState::default(),
            training_window: window,
        }
    }

    #[test]
    fn test_full_window_by_default() {
        let view = recompute(&state(None), &set(), &standard_fitters(), 15.0).unwrap();
        assert_eq!(view.boundary, ITALY.len());
        assert_eq!(view.slider.max, ITALY.len());
        assert_eq!(view.slider.value, ITALY.len());
        assert_eq!(view.labels.len(), ITALY.len() + 3);
        assert_eq!(view.labels[0], "27 Feb");
    }

    #[test]
    fn test_window_is_clamped() {
        let view = recompute(&state(Some(50)), &set(), &standard_fitters(), 15.0).unwrap();
        assert_eq!(view.boundary, ITALY.len());
    }

    #[test]
    fn test_dataset_order_and_lengths() {
        let view = recompute(&state(Some(10)), &set(), &standard_fitters(), 15.0).unwrap();
        let keys: Vec<&str> = view.datasets.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys.last(), Some(&OBSERVED_KEY));
        assert_eq!(keys[keys.len() - 2], "exponential");
        for dataset in &view.datasets {
            assert_eq!(dataset.data.len(), ITALY.len() + 3, "{}", dataset.key);
            assert_eq!(dataset.data.len(), view.labels.len());
        }
        let observed = view.datasets.last().unwrap();
        assert_eq!(observed.non_null_count(), ITALY.len());
        assert_eq!(observed.data[ITALY.len()], None);
        assert!(keys.contains(&"cubic"));
        assert!(keys.contains(&"quadratic"));
    }

    #[test]
    fn test_failed_fit_dropped() {
        // Three points: cubic needs four
        let view = recompute(&state(Some(3)), &set(), &standard_fitters(), 15.0).unwrap();
        assert!(view.datasets.iter().all(|d| d.key != "cubic"));
        assert!(view.datasets.iter().any(|d| d.key == "quadratic"));
    }

    #[test]
    fn test_slider_width() {
        let view = recompute(&state(None), &set(), &standard_fitters(), 15.0).unwrap();
        let expected = 14.0 / 17.0;
        assert!((view.slider.width_fraction - expected).abs() < 1e-12);
    }

    #[test]
    fn test_lockdown_annotation() {
        let view = recompute(&state(None), &set(), &standard_fitters(), 15.0).unwrap();
        let annotation = view.annotation.unwrap();
        assert_eq!(annotation.index, 12);
        assert_eq!(annotation.label, LOCKDOWN_LABEL);
    }

    #[test]
    fn test_logarithmic_axis() {
        let mut session = state(None);
        session.ui.scale = Scale::Logarithmic;
        let view = recompute(&session, &set(), &standard_fitters(), 15.0).unwrap();
        assert_eq!(view.axis.min, 10.0);
        assert_eq!(view.axis.max, Some(100_000.0));
    }

    #[test]
    fn test_single_point_series_has_no_curves() {
        let mut session = state(None);
        session.ui.filter_cumulative = Filter::Netherlands;
        let view = recompute(&session, &set(), &standard_fitters(), 15.0).unwrap();
        // A single observed point is not drawable; neither is a failed fit
        assert!(view.datasets.iter().all(|d| d.key != OBSERVED_KEY));
        assert!(view.datasets.iter().all(|d| d.key != "exponential"));
        assert_eq!(view.annotation, None);
    }

    #[test]
    fn test_empty_series_is_error() {
        let mut session = state(None);
        session.ui.filter_cumulative = Filter::Germany;
        assert_eq!(
            recompute(&session, &set(), &standard_fitters(), 15.0).unwrap_err(),
            DashboardError::EmptySeries("germany".to_string())
        );
    }
}
