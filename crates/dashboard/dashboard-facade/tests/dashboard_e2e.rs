//! End-to-end tests for the dashboard
//!
//! Series come in through the static source, the same path the server and
//! the CLI take for a saved response.

use dashboard_facade::{hash, Controller, DashboardError, Filter, Scale, UiState};
use regression_core::{AsymmetricSigmoidalFitter, CurveFitter, PolynomialFitter};
use series_spi::SeriesSet;
use source_facade::{SeriesSource, StaticSeriesSource};

const ITALY: [u32; 20] = [
    7, 10, 12, 17, 21, 29, 34, 52, 79, 107, 148, 197, 233, 366, 463, 631, 827, 1016, 1266, 1441,
];

fn merged_json() -> String {
    let national: Vec<serde_json::Value> = ITALY
        .iter()
        .enumerate()
        .map(|(i, v)| serde_json::json!({"date": format!("2020-03-{:02}", i + 1), "value": v}))
        .collect();
    let regional: Vec<serde_json::Value> = ITALY
        .iter()
        .enumerate()
        .map(|(i, v)| {
            serde_json::json!({
                "date": format!("2020-03-{:02}", i + 1),
                "region": "Lombardia",
                "value": v * 2 / 3,
            })
        })
        .collect();
    let global: Vec<serde_json::Value> = [3, 9, 17, 28, 35, 54, 55, 133, 195, 289]
        .iter()
        .enumerate()
        .map(|(i, v)| {
            serde_json::json!({
                "date": format!("2020-03-{:02}", i + 8),
                "country": "Spain",
                "value": v,
            })
        })
        .collect();
    serde_json::json!({
        "italianData": national,
        "regionalData": regional,
        "globalData": global,
    })
    .to_string()
}

async fn series_set() -> SeriesSet {
    StaticSeriesSource::from_json(&merged_json())
        .unwrap()
        .fetch_all_series()
        .await
        .unwrap()
}

#[tokio::test]
async fn e2e_default_session() {
    let controller = Controller::new(series_set().await, UiState::default());
    let view = controller.refresh().unwrap();

    // Italy above 15 deaths starts on the fourth day.
    assert_eq!(view.boundary, 17);
    assert_eq!(view.labels.len(), 17 + 3);
    assert_eq!(view.labels[0], "4 Mar");
    assert_eq!(view.datasets.last().unwrap().key, "observed");
    for dataset in &view.datasets {
        assert_eq!(dataset.data.len(), view.labels.len());
    }
    assert_eq!(view.annotation.as_ref().map(|a| a.index), Some(12));
}

#[tokio::test]
async fn e2e_slider_then_filter() {
    let mut controller = Controller::new(series_set().await, UiState::default());

    let view = controller.on_slider(12).unwrap();
    assert_eq!(view.boundary, 12);
    assert_eq!(view.slider.value, 12);

    // Spain has eight days above 15.
    let view = controller.on_filter_change(Filter::Spain).unwrap();
    assert_eq!(controller.state().training_window, Some(8));
    assert_eq!(view.boundary, 8);
    assert_eq!(view.annotation.as_ref().map(|a| a.index), Some(7));
}

#[tokio::test]
async fn e2e_hash_drives_both_charts() {
    let mut controller = Controller::new(series_set().await, UiState::default());
    let fragment = hash::encode(&UiState {
        filter_cumulative: Filter::Lombardy,
        filter_daily: Filter::Spain,
        scale: Scale::Logarithmic,
        forecast: 10,
    });

    let (cumulative, daily) = controller.on_hash_change(&fragment).unwrap();
    assert_eq!(cumulative.filter, Filter::Lombardy);
    assert_eq!(cumulative.axis.min, 10.0);
    assert_eq!(daily.filter, Filter::Spain);
    assert_eq!(daily.dataset.non_null_count(), 8);
    assert_eq!(daily.dataset.data.len(), 8 + 10);
    assert_eq!(daily.labels.len(), 8 + 10);
    assert_eq!(controller.hash(), fragment);
}

#[tokio::test]
async fn e2e_missing_country_is_reported() {
    let mut controller = Controller::new(series_set().await, UiState::default());
    let result = controller.on_filter_change(Filter::Germany);
    assert_eq!(result.unwrap_err(), DashboardError::EmptySeries("germany".to_string()));
}

#[tokio::test]
async fn e2e_custom_fitters() {
    let fitters: Vec<Box<dyn CurveFitter>> = vec![
        Box::new(PolynomialFitter::cubic()),
        Box::new(AsymmetricSigmoidalFitter::default()),
    ];
    let controller =
        Controller::new(series_set().await, UiState::default()).with_fitters(fitters);
    let view = controller.refresh().unwrap();
    let keys: Vec<&str> = view.datasets.iter().map(|d| d.key.as_str()).collect();
    assert!(keys.contains(&"cubic"));
    assert!(!keys.contains(&"exponential"));
}

#[tokio::test]
async fn e2e_compare_ranks_by_last_value() {
    let controller = Controller::new(series_set().await, UiState::default());
    let view = controller.compare();
    let keys: Vec<&str> = view.datasets.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, vec!["italy", "spain"]);
    assert_eq!(view.axis.scale, Scale::Logarithmic);
}
