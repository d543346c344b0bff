//! Fitted model types.

mod fit_kind;
mod fitted_model;

pub use fit_kind::FitKind;
pub use fitted_model::{asymmetric_sigmoid, DataPoint, FittedModel};
