//! Fitted model: parameters plus a prediction function.

use serde::{Deserialize, Serialize};

use super::FitKind;

/// `(x, y)` training pair; `x` is the 1-based day number.
pub type DataPoint = (f64, f64);

/// Evaluate the five-parameter logistic `d + (a − d) / (1 + (x/c)^b)^m`.
///
/// The power `m` is applied through `exp(−m·ln(1 + (x/c)^b))` so very large
/// exponents do not overflow before the division.
pub fn asymmetric_sigmoid(params: &[f64], x: f64) -> f64 {
    let [a, b, c, d, m] = match params {
        [a, b, c, d, m] => [*a, *b, *c, *d, *m],
        _ => return f64::NAN,
    };
    let u = (x / c).powf(b);
    d + (a - d) * (-m * u.ln_1p()).exp()
}

/// A model produced by one fitter for one recompute cycle.
///
/// The parameter vector is opaque to everything but [`FittedModel::predict`]:
/// - exponential: `[a, b]`
/// - polynomial: coefficients, constant term first
/// - asymmetric sigmoidal: `[a, b, c, d, m]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
    kind: FitKind,
    params: Vec<f64>,
}

impl FittedModel {
    /// Create a new FittedModel.
    pub fn new(kind: FitKind, params: Vec<f64>) -> Self {
        Self { kind, params }
    }

    /// Model family.
    pub fn kind(&self) -> FitKind {
        self.kind
    }

    /// Raw parameter vector.
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Predicted value at day number `x`.
    ///
    /// Non-finite results are returned as-is.
    pub fn predict(&self, x: f64) -> f64 {
        match self.kind {
            FitKind::Exponential => match self.params.as_slice() {
                [a, b] => a * (b * x).exp(),
                _ => f64::NAN,
            },
            FitKind::Quadratic | FitKind::Cubic => self
                .params
                .iter()
                .rev()
                .fold(0.0, |acc, &coefficient| acc * x + coefficient),
            FitKind::AsymmetricSigmoidal => asymmetric_sigmoid(&self.params, x),
        }
    }
}
