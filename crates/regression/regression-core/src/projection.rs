//! Projection engine
//!
//! Evaluates a fitted model over `1..=len + horizon` so every curve lines up
//! with the observed series on the same day axis.

use regression_spi::{FitKind, FittedModel};
use serde::{Deserialize, Serialize};

/// What the projected curve covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Model values over the whole axis, including the training range
    #[default]
    BackFit,
    /// Only from the training boundary onwards; earlier days are empty
    ForecastOnly,
}

/// Shape of one projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionRequest {
    /// Points used for fitting (`k`)
    pub training_window: usize,
    /// Observed series length
    pub series_len: usize,
    /// Days projected past the end of the series (`h`)
    pub horizon: usize,
    pub mode: ProjectionMode,
}

impl ProjectionRequest {
    pub fn new(
        training_window: usize,
        series_len: usize,
        horizon: usize,
        mode: ProjectionMode,
    ) -> Self {
        Self {
            training_window,
            series_len,
            horizon,
            mode,
        }
    }

    /// Number of values in the projected curve.
    pub fn output_len(&self) -> usize {
        self.series_len + self.horizon
    }
}

/// A projected curve aligned with the observed series.
///
/// Values are rounded to whole counts. `None` marks days the curve does not
/// cover; non-finite predictions are kept and serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub kind: FitKind,
    pub values: Vec<Option<f64>>,
    /// 1-based index of the last training day
    pub boundary: usize,
}

impl Projection {
    /// An all-empty curve, used when a fit fails.
    pub fn empty(kind: FitKind, request: &ProjectionRequest) -> Self {
        Self {
            kind,
            values: vec![None; request.output_len()],
            boundary: request.training_window,
        }
    }

    /// Values that carry a number (finite or not).
    pub fn non_null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// A curve with a single point draws nothing.
    pub fn is_renderable(&self) -> bool {
        self.non_null_count() > 1
    }
}

/// Evaluate `model` at day numbers `1..=len + horizon`.
///
/// # Example
///
/// ```rust
/// use regression_core::{project, FitKind, FittedModel, ProjectionMode, ProjectionRequest};
///
/// let model = FittedModel::new(FitKind::Quadratic, vec![0.0, 0.0, 1.0]);
/// let request = ProjectionRequest::new(3, 4, 2, ProjectionMode::ForecastOnly);
/// let projection = project(&model, &request);
/// assert_eq!(projection.values, vec![None, None, Some(9.0), Some(16.0), Some(25.0), Some(36.0)]);
/// ```
pub fn project(model: &FittedModel, request: &ProjectionRequest) -> Projection {
    let values = (1..=request.output_len())
        .map(|day| {
            if request.mode == ProjectionMode::ForecastOnly && day < request.training_window {
                None
            } else {
                Some(model.predict(day as f64).round())
            }
        })
        .collect();

    Projection {
        kind: model.kind(),
        values,
        boundary: request.training_window,
    }
}
