//! Contracts for curve fitters.

mod curve_fitter;

pub use curve_fitter::CurveFitter;
