//! Regression Core
//!
//! Curve fitters for cumulative count series and the projection engine that
//! evaluates a fitted model over the observed range plus a forecast horizon.
//!
//! ## Fit families
//!
//! - **Exponential** - y-weighted log-linear least squares
//! - **Polynomial** - ordinary least squares of order 2 or 3
//! - **Asymmetric sigmoidal** - five-parameter logistic fitted with
//!   Levenberg-Marquardt
//!
//! ## Example
//!
//! ```rust
//! use regression_core::{project, CurveFitter, ExponentialFitter, ProjectionMode, ProjectionRequest};
//!
//! let points: Vec<(f64, f64)> = [1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &y)| ((i + 1) as f64, y))
//!     .collect();
//!
//! let model = ExponentialFitter::new().fit(&points).unwrap();
//! let request = ProjectionRequest::new(7, 7, 3, ProjectionMode::BackFit);
//! let projection = project(&model, &request);
//! assert_eq!(projection.values.len(), 10);
//! ```

pub mod exponential;
mod linalg;
pub mod polynomial;
pub mod projection;
pub mod sigmoidal;

// Re-export SPI traits for implementations
pub use regression_spi::{
    asymmetric_sigmoid, CurveFitter, DataPoint, FitError, FitKind, FittedModel, Result,
};

// Re-export main types
pub use exponential::ExponentialFitter;
pub use polynomial::PolynomialFitter;
pub use projection::{project, Projection, ProjectionMode, ProjectionRequest};
pub use sigmoidal::{AsymmetricSigmoidalFitter, SigmoidalConfig};

/// The four fitters in display order: exponential, cubic, quadratic,
/// asymmetric sigmoidal.
pub fn standard_fitters() -> Vec<Box<dyn CurveFitter>> {
    vec![
        Box::new(ExponentialFitter::new()),
        Box::new(PolynomialFitter::cubic()),
        Box::new(PolynomialFitter::quadratic()),
        Box::new(AsymmetricSigmoidalFitter::default()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fitters_order() {
        let kinds: Vec<FitKind> = standard_fitters().iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                FitKind::Exponential,
                FitKind::Cubic,
                FitKind::Quadratic,
                FitKind::AsymmetricSigmoidal,
            ]
        );
    }
}
