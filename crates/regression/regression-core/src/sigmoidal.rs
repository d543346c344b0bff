//! Asymmetric sigmoidal fit
//!
//! Fits the five-parameter logistic
//!
//! ```text
//! f(x) = d + (a − d) / (1 + (x/c)^b)^m
//! ```
//!
//! with damped Gauss-Newton (Levenberg-Marquardt). The surface is badly
//! conditioned, so the result depends heavily on the starting point; the
//! default configuration carries a fixed guess and a floor on `c`.
//!
//! ## Iteration
//!
//! Each step solves `(JᵀJ + λ·diag(JᵀJ)) δ = Jᵀr` with `r = y − f`, clamps the
//! candidate to the lower bounds, and keeps it only if the squared error
//! drops. λ shrinks tenfold on success and grows tenfold on rejection.

use nalgebra::{DMatrix, DVector};
use regression_spi::{
    asymmetric_sigmoid, CurveFitter, DataPoint, FitError, FitKind, FittedModel, Result,
};
use tracing::debug;

use crate::linalg::solve_square;

const PARAMETERS: usize = 5;

/// Damping ceiling; beyond this the step is effectively zero.
const MAX_DAMPING: f64 = 1e16;

/// Floor for diagonal scaling so flat directions still get damped.
const MIN_DIAGONAL: f64 = 1e-9;

/// Levenberg-Marquardt settings for [`AsymmetricSigmoidalFitter`].
#[derive(Debug, Clone, PartialEq)]
pub struct SigmoidalConfig {
    /// Starting `[a, b, c, d, m]`
    pub initial_guess: [f64; PARAMETERS],
    /// Initial damping λ
    pub damping: f64,
    /// Upper bound on iterations
    pub max_iterations: usize,
    /// Per-parameter lower bounds; `-inf` means unbounded
    pub lower_bounds: [f64; PARAMETERS],
    /// Relative cost improvement below which the search stops
    pub tolerance: f64,
}

impl Default for SigmoidalConfig {
    fn default() -> Self {
        Self {
            initial_guess: [34.50764, 4.134764, 744.5857, 2549.07, 5114272.0],
            damping: 1.0,
            max_iterations: 1000,
            lower_bounds: [
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
                700.0,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ],
            tolerance: 1e-10,
        }
    }
}

impl SigmoidalConfig {
    /// Replace the starting point.
    pub fn with_initial_guess(mut self, guess: [f64; PARAMETERS]) -> Self {
        self.initial_guess = guess;
        self
    }

    /// Replace the lower bounds.
    pub fn with_lower_bounds(mut self, bounds: [f64; PARAMETERS]) -> Self {
        self.lower_bounds = bounds;
        self
    }

    /// Drop all lower bounds.
    pub fn unbounded(self) -> Self {
        self.with_lower_bounds([f64::NEG_INFINITY; PARAMETERS])
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.damping.is_finite() && self.damping > 0.0) {
            return Err(FitError::InvalidParameter {
                name: "damping".to_string(),
                reason: format!("must be positive and finite, got {}", self.damping),
            });
        }
        if self.initial_guess.iter().any(|v| !v.is_finite()) {
            return Err(FitError::InvalidParameter {
                name: "initial_guess".to_string(),
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }

    fn clamp(&self, params: &mut [f64; PARAMETERS]) {
        for (value, bound) in params.iter_mut().zip(self.lower_bounds.iter()) {
            if *value < *bound {
                *value = *bound;
            }
        }
    }
}

/// Five-parameter logistic fitter.
#[derive(Debug, Clone, Default)]
pub struct AsymmetricSigmoidalFitter {
    config: SigmoidalConfig,
}

impl AsymmetricSigmoidalFitter {
    pub fn new(config: SigmoidalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SigmoidalConfig {
        &self.config
    }

    /// Run Levenberg-Marquardt and return the best parameters with their cost.
    pub fn optimize(&self, points: &[DataPoint]) -> Result<([f64; PARAMETERS], f64)> {
        if points.is_empty() {
            return Err(FitError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        self.config.validate()?;

        let mut params = self.config.initial_guess;
        self.config.clamp(&mut params);
        let mut cost = sum_of_squares(&params, points);
        let mut best = (params, cost);
        let mut lambda = self.config.damping;

        for iteration in 0..self.config.max_iterations {
            if cost == 0.0 || lambda > MAX_DAMPING {
                break;
            }

            let (jtj, jtr) = normal_equations(&params, points);
            let mut damped = jtj.clone();
            for i in 0..PARAMETERS {
                damped[(i, i)] += lambda * jtj[(i, i)].max(MIN_DIAGONAL);
            }

            let step = match solve_square(damped, &jtr) {
                Some(step) => step,
                None => {
                    lambda *= 10.0;
                    continue;
                }
            };

            let mut candidate = params;
            for (value, delta) in candidate.iter_mut().zip(step.iter()) {
                *value += delta;
            }
            self.config.clamp(&mut candidate);
            let candidate_cost = sum_of_squares(&candidate, points);

            if candidate_cost.is_finite() && candidate_cost < cost {
                let improvement = (cost - candidate_cost) / cost;
                params = candidate;
                cost = candidate_cost;
                lambda /= 10.0;
                if cost < best.1 {
                    best = (params, cost);
                }
                if improvement < self.config.tolerance {
                    debug!(iteration, cost, "sigmoidal fit converged");
                    break;
                }
            } else {
                lambda *= 10.0;
            }
        }

        debug!(cost = best.1, params = ?best.0, "sigmoidal fit finished");
        Ok(best)
    }
}

impl CurveFitter for AsymmetricSigmoidalFitter {
    fn kind(&self) -> FitKind {
        FitKind::AsymmetricSigmoidal
    }

    fn fit(&self, points: &[DataPoint]) -> Result<FittedModel> {
        let (params, _) = self.optimize(points)?;
        Ok(FittedModel::new(FitKind::AsymmetricSigmoidal, params.to_vec()))
    }
}

/// Squared error; non-finite predictions make the whole cost infinite.
fn sum_of_squares(params: &[f64; PARAMETERS], points: &[DataPoint]) -> f64 {
    let total: f64 = points
        .iter()
        .map(|&(x, y)| (y - asymmetric_sigmoid(params, x)).powi(2))
        .sum();
    if total.is_finite() {
        total
    } else {
        f64::INFINITY
    }
}

/// Partial derivatives of `f` with respect to `[a, b, c, d, m]` at `x`.
fn gradient(params: &[f64; PARAMETERS], x: f64) -> [f64; PARAMETERS] {
    let [a, b, c, d, m] = *params;
    let ratio = x / c;
    let u = ratio.powf(b);
    let log_term = u.ln_1p();
    let s = (-m * log_term).exp();
    // ds/du
    let ds_du = -m * s / (1.0 + u);
    let du_db = if ratio > 0.0 { u * ratio.ln() } else { 0.0 };
    let du_dc = -b * u / c;

    let grad = [
        s,
        (a - d) * ds_du * du_db,
        (a - d) * ds_du * du_dc,
        1.0 - s,
        -(a - d) * s * log_term,
    ];
    grad.map(|g| if g.is_finite() { g } else { 0.0 })
}

/// Accumulate `JᵀJ` and `Jᵀr` without materializing the Jacobian.
fn normal_equations(
    params: &[f64; PARAMETERS],
    points: &[DataPoint],
) -> (DMatrix<f64>, DVector<f64>) {
    let mut jtj = DMatrix::zeros(PARAMETERS, PARAMETERS);
    let mut jtr = DVector::zeros(PARAMETERS);
    for &(x, y) in points {
        let residual = y - asymmetric_sigmoid(params, x);
        if !residual.is_finite() {
            continue;
        }
        let grad = gradient(params, x);
        for i in 0..PARAMETERS {
            jtr[i] += grad[i] * residual;
            for j in 0..PARAMETERS {
                jtj[(i, j)] += grad[i] * grad[j];
            }
        }
    }
    (jtj, jtr)
}
