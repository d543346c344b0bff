//! Polynomial least squares
//!
//! Fits `y = β₀ + β₁x + … + βₖxᵏ` by ordinary least squares. The Vandermonde
//! matrix is built on `x / max|x|` so powers of day numbers in the hundreds
//! stay well conditioned; coefficients are rescaled before returning.

use nalgebra::{DMatrix, DVector};
use regression_spi::{CurveFitter, DataPoint, FitError, FitKind, FittedModel, Result};

use crate::linalg::least_squares;

/// Ordinary least-squares polynomial of order 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialFitter {
    order: usize,
}

impl PolynomialFitter {
    /// Create a fitter of the given order.
    ///
    /// Only orders 2 and 3 map to a displayed model family.
    pub fn new(order: usize) -> Result<Self> {
        match order {
            2 | 3 => Ok(Self { order }),
            _ => Err(FitError::InvalidParameter {
                name: "order".to_string(),
                reason: format!("expected 2 or 3, got {}", order),
            }),
        }
    }

    pub fn quadratic() -> Self {
        Self { order: 2 }
    }

    pub fn cubic() -> Self {
        Self { order: 3 }
    }

    pub fn order(&self) -> usize {
        self.order
    }
}

impl CurveFitter for PolynomialFitter {
    fn kind(&self) -> FitKind {
        if self.order == 2 {
            FitKind::Quadratic
        } else {
            FitKind::Cubic
        }
    }

    fn fit(&self, points: &[DataPoint]) -> Result<FittedModel> {
        let columns = self.order + 1;
        if points.len() < columns {
            return Err(FitError::InsufficientData {
                required: columns,
                actual: points.len(),
            });
        }

        let scale = points
            .iter()
            .map(|&(x, _)| x.abs())
            .fold(0.0_f64, f64::max);
        let scale = if scale > 0.0 { scale } else { 1.0 };

        let design = DMatrix::from_fn(points.len(), columns, |row, col| {
            (points[row].0 / scale).powi(col as i32)
        });
        let y = DVector::from_iterator(points.len(), points.iter().map(|&(_, y)| y));

        let scaled = least_squares(design, &y).ok_or(FitError::SingularSystem)?;
        let coefficients: Vec<f64> = scaled
            .iter()
            .enumerate()
            .map(|(power, beta)| beta / scale.powi(power as i32))
            .collect();

        Ok(FittedModel::new(self.kind(), coefficients))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rss(model: &FittedModel, points: &[DataPoint]) -> f64 {
        points
            .iter()
            .map(|&(x, y)| (y - model.predict(x)).powi(2))
            .sum()
    }

    #[test]
    fn test_quadratic_exact_on_three_points() {
        // y = 1 - 2x + 0.5x^2
        let points: Vec<DataPoint> = [1.0, 2.0, 3.0]
            .iter()
            .map(|&x| (x, 1.0 - 2.0 * x + 0.5 * x * x))
            .collect();
        let model = PolynomialFitter::quadratic().fit(&points).unwrap();
        let params = model.params();
        assert!((params[0] - 1.0).abs() < 1e-8);
        assert!((params[1] + 2.0).abs() < 1e-8);
        assert!((params[2] - 0.5).abs() < 1e-8);
    }

    #[test]
    fn test_cubic_exact_on_four_points() {
        let points: Vec<DataPoint> = [1.0, 2.0, 3.0, 4.0]
            .iter()
            .map(|&x| (x, x * x * x - x))
            .collect();
        let model = PolynomialFitter::cubic().fit(&points).unwrap();
        for &(x, y) in &points {
            assert!((model.predict(x) - y).abs() < 1e-8);
        }
        assert!((model.predict(5.0) - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_fits_large_day_numbers() {
        let points: Vec<DataPoint> = (200..260)
            .map(|x| {
                let x = x as f64;
                (x, 3.0 + 0.01 * x * x)
            })
            .collect();
        let model = PolynomialFitter::cubic().fit(&points).unwrap();
        assert!((model.predict(270.0) - (3.0 + 0.01 * 270.0 * 270.0)).abs() < 1e-3);
    }

    #[test]
    fn test_higher_order_fits_no_worse() {
        let points: Vec<DataPoint> = [3.0, 5.0, 9.0, 17.0, 28.0, 41.0, 60.0, 79.0, 107.0, 148.0]
            .iter()
            .enumerate()
            .map(|(i, &y)| ((i + 1) as f64, y))
            .collect();
        let quadratic = PolynomialFitter::quadratic().fit(&points).unwrap();
        let cubic = PolynomialFitter::cubic().fit(&points).unwrap();
        assert!(rss(&cubic, &points) <= rss(&quadratic, &points) + 1e-9);
    }

    #[test]
    fn test_too_few_points() {
        let err = PolynomialFitter::cubic()
            .fit(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)])
            .unwrap_err();
        assert_eq!(
            err,
            FitError::InsufficientData {
                required: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_repeated_x_is_singular() {
        let points = vec![(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)];
        assert_eq!(
            PolynomialFitter::quadratic().fit(&points).unwrap_err(),
            FitError::SingularSystem
        );
    }

    #[test]
    fn test_order_validation() {
        assert!(PolynomialFitter::new(2).is_ok());
        assert_eq!(PolynomialFitter::new(3).unwrap().kind(), FitKind::Cubic);
        assert!(matches!(
            PolynomialFitter::new(5),
            Err(FitError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(PolynomialFitter::quadratic().kind(), FitKind::Quadratic);
        assert_eq!(PolynomialFitter::cubic().order(), 3);
    }
}
