//! Dashboard Service Provider Interface
//!
//! Types shared by the recompute controller and its front ends:
//!
//! - [`Filter`], [`Scale`]: the selectable options
//! - [`UiState`]: the URL-fragment record
//! - [`SessionState`]: UI state plus the slider position
//! - [`CumulativeView`], [`DailyView`], [`CompareView`]: what the charts draw
//! - [`DashboardError`]: invalid UI input or missing data

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{DashboardError, Result};
pub use model::{
    Annotation, AxisSpec, CompareView, CumulativeView, DailyView, Dataset, Filter, Scale,
    SessionState, SliderSpec, UiState,
};
