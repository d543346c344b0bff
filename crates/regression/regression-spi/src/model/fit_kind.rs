//! Model families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The curve families fitted side by side.
///
/// They bracket plausible near-term regimes of cumulative epidemic counts:
/// unbounded exponential growth, a local polynomial trend, and logistic
/// saturation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitKind {
    /// `y = a·e^(b·x)`
    Exponential,
    /// Second-order polynomial
    Quadratic,
    /// Third-order polynomial
    Cubic,
    /// Five-parameter logistic `d + (a − d) / (1 + (x/c)^b)^m`
    AsymmetricSigmoidal,
}

impl FitKind {
    /// Stable machine key.
    pub fn key(&self) -> &'static str {
        match self {
            FitKind::Exponential => "exponential",
            FitKind::Quadratic => "quadratic",
            FitKind::Cubic => "cubic",
            FitKind::AsymmetricSigmoidal => "asymmetric_sigmoidal",
        }
    }

    /// Human-readable legend label.
    pub fn label(&self) -> &'static str {
        match self {
            FitKind::Exponential => "Exponential",
            FitKind::Quadratic => "Quadratic",
            FitKind::Cubic => "Cubic",
            FitKind::AsymmetricSigmoidal => "Asymmetric sigmoidal (logistic)",
        }
    }

    /// Number of parameters of the model.
    pub fn parameter_count(&self) -> usize {
        match self {
            FitKind::Exponential => 2,
            FitKind::Quadratic => 3,
            FitKind::Cubic => 4,
            FitKind::AsymmetricSigmoidal => 5,
        }
    }
}

impl fmt::Display for FitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
