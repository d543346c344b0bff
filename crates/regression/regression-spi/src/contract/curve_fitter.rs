//! Curve fitter trait

use crate::error::Result;
use crate::model::{DataPoint, FitKind, FittedModel};

/// Fits one model family to a training prefix.
///
/// Points are `(day number, cumulative value)` pairs with day numbers
/// starting at 1. A fitter never panics on bad input: an under-determined or
/// out-of-domain training set is reported as an error and the caller drops
/// the curve.
pub trait CurveFitter: Send + Sync {
    /// Model family produced by this fitter
    fn kind(&self) -> FitKind;

    /// Fit the model to the training points
    fn fit(&self, points: &[DataPoint]) -> Result<FittedModel>;
}
