//! Regression Facade
//!
//! Unified re-exports for the regression domain:
//! - `regression_spi` - Fitter contract, fitted models and errors
//! - `regression_core` - Fitters and the projection engine
//!
//! # Example
//!
//! ```rust
//! use regression_facade::{project, standard_fitters, ProjectionMode, ProjectionRequest};
//!
//! let points: Vec<(f64, f64)> = [16.0, 22.0, 30.0, 41.0, 55.0, 74.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &y)| ((i + 1) as f64, y))
//!     .collect();
//! let request = ProjectionRequest::new(points.len(), points.len(), 3, ProjectionMode::BackFit);
//!
//! for fitter in standard_fitters() {
//!     if let Ok(model) = fitter.fit(&points) {
//!         assert_eq!(project(&model, &request).values.len(), 9);
//!     }
//! }
//! ```

// Re-export everything from SPI
pub use regression_spi::*;

// Re-export core modules for direct access
pub use regression_core::{exponential, polynomial, projection, sigmoidal};

pub use regression_core::{
    project, standard_fitters, AsymmetricSigmoidalFitter, ExponentialFitter, PolynomialFitter,
    Projection, ProjectionMode, ProjectionRequest, SigmoidalConfig,
};
