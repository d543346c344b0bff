//! Exponential fit
//!
//! Fits `y = a·e^(b·x)` by linearizing to `ln y = ln a + b·x` and solving the
//! y-weighted least-squares problem in closed form. Weighting each residual
//! by `y` keeps the large recent values from being drowned out by the early
//! small ones, which unweighted log fits over-emphasize.
//!
//! ## When it fails
//!
//! - any `y ≤ 0` (the logarithm is undefined)
//! - fewer than 2 points (the slope is undetermined)

use regression_spi::{CurveFitter, DataPoint, FitError, FitKind, FittedModel, Result};

/// Exponential growth fitter.
///
/// # Example
///
/// ```rust
/// use regression_core::{CurveFitter, ExponentialFitter};
///
/// let points: Vec<(f64, f64)> = (1..=6)
///     .map(|x| (x as f64, 5.0 * (0.1 * x as f64).exp()))
///     .collect();
/// let model = ExponentialFitter::new().fit(&points).unwrap();
/// assert!((model.params()[0] - 5.0).abs() < 0.05);
/// assert!((model.params()[1] - 0.1).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialFitter;

impl ExponentialFitter {
    pub fn new() -> Self {
        Self
    }
}

impl CurveFitter for ExponentialFitter {
    fn kind(&self) -> FitKind {
        FitKind::Exponential
    }

    fn fit(&self, points: &[DataPoint]) -> Result<FittedModel> {
        if points.len() < 2 {
            return Err(FitError::InsufficientData {
                required: 2,
                actual: points.len(),
            });
        }

        if let Some((index, &(_, value))) = points.iter().enumerate().find(|(_, p)| p.1 <= 0.0) {
            return Err(FitError::NonPositiveValue { index, value });
        }

        let mut sum_y = 0.0;
        let mut sum_xxy = 0.0;
        let mut sum_ylny = 0.0;
        let mut sum_xylny = 0.0;
        let mut sum_xy = 0.0;
        for &(x, y) in points {
            let ln_y = y.ln();
            sum_y += y;
            sum_xxy += x * x * y;
            sum_ylny += y * ln_y;
            sum_xylny += x * y * ln_y;
            sum_xy += x * y;
        }

        let denominator = sum_y * sum_xxy - sum_xy * sum_xy;
        if denominator.abs() <= f64::EPSILON * sum_y * sum_xxy {
            return Err(FitError::SingularSystem);
        }

        let a = ((sum_xxy * sum_ylny - sum_xy * sum_xylny) / denominator).exp();
        let b = (sum_y * sum_xylny - sum_xy * sum_ylny) / denominator;

        Ok(FittedModel::new(FitKind::Exponential, vec![a, b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(a: f64, b: f64, n: usize) -> Vec<DataPoint> {
        (1..=n)
            .map(|x| (x as f64, a * (b * x as f64).exp()))
            .collect()
    }

    #[test]
    fn test_recovers_parameters() {
        let model = ExponentialFitter::new().fit(&generated(5.0, 0.1, 5)).unwrap();
        let (a, b) = (model.params()[0], model.params()[1]);
        assert!((a - 5.0).abs() / 5.0 < 0.01, "a = {}", a);
        assert!((b - 0.1).abs() / 0.1 < 0.01, "b = {}", b);
    }

    #[test]
    fn test_recovers_steep_growth() {
        let model = ExponentialFitter::new().fit(&generated(2.0, 0.35, 20)).unwrap();
        assert!((model.params()[0] - 2.0).abs() < 1e-6);
        assert!((model.params()[1] - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_growth_projection_increases() {
        let points: Vec<DataPoint> = [1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0]
            .iter()
            .enumerate()
            .map(|(i, &y)| ((i + 1) as f64, y))
            .collect();
        let model = ExponentialFitter::new().fit(&points).unwrap();
        assert!(model.params()[1] > 0.0);
        assert!(model.predict(10.0) > model.predict(7.0));
    }

    #[test]
    fn test_zero_value_rejected() {
        let points = vec![(1.0, 0.0), (2.0, 1.0), (3.0, 2.0)];
        let err = ExponentialFitter::new().fit(&points).unwrap_err();
        assert_eq!(err, FitError::NonPositiveValue { index: 0, value: 0.0 });
    }

    #[test]
    fn test_negative_value_rejected() {
        let points = vec![(1.0, 1.0), (2.0, -1.0)];
        assert!(matches!(
            ExponentialFitter::new().fit(&points),
            Err(FitError::NonPositiveValue { index: 1, .. })
        ));
    }

    #[test]
    fn test_single_point_rejected() {
        let err = ExponentialFitter::new().fit(&[(1.0, 3.0)]).unwrap_err();
        assert_eq!(
            err,
            FitError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(ExponentialFitter::new().kind(), FitKind::Exponential);
    }
}
