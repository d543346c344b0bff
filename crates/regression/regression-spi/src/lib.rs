//! Regression Service Provider Interface
//!
//! Defines the contract every curve fitter adheres to:
//!
//! - [`CurveFitter`]: fits one model family to a training prefix
//! - [`FittedModel`]: parameter vector plus `predict(x)`
//! - [`FitKind`]: the model families shown side by side
//! - [`FitError`]: standardized error type for fitting
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::CurveFitter;
pub use error::{FitError, Result};
pub use model::{asymmetric_sigmoid, DataPoint, FitKind, FittedModel};
