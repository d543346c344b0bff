//! Error types for curve fitting
//!
//! This module provides the [`FitError`] enum and [`Result`] type alias.

mod fit_error;

pub use fit_error::{FitError, Result};
