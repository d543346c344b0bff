//! Dashboard Core
//!
//! The reactive recompute controller and the pure functions behind it:
//!
//! - [`hash`] - URL-fragment encoding of [`UiState`]
//! - [`recompute()`] - fit, project and lay out the cumulative chart
//! - [`daily_view`], [`compare_view`] - the two secondary charts
//! - [`Controller`] - single owner of the mutable session state
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use dashboard_core::{Controller, UiState};
//! use series_spi::{Observation, SeriesGroup, SeriesSet};
//!
//! let start = NaiveDate::from_ymd_opt(2020, 2, 24).unwrap();
//! let rows: Vec<Observation> = [17.0, 21.0, 29.0, 34.0, 52.0, 79.0, 107.0, 148.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| Observation::new(start + chrono::Days::new(i as u64), v, SeriesGroup::National))
//!     .collect();
//! let set = series_core::group_observations(&rows);
//!
//! let mut controller = Controller::new(set, UiState::default());
//! let view = controller.on_slider(5).unwrap();
//! assert_eq!(view.boundary, 5);
//! assert_eq!(view.labels.len(), 8 + 3);
//! ```

pub mod axis;
pub mod compare;
pub mod controller;
pub mod daily;
pub mod hash;
pub mod labels;
pub mod recompute;
pub mod select;
pub mod window;

// Re-export SPI types for implementations
pub use dashboard_spi::{
    Annotation, AxisSpec, CompareView, CumulativeView, DailyView, DashboardError, Dataset, Filter,
    Result, Scale, SessionState, SliderSpec, UiState,
};

pub use axis::{axis_spec, linear_axis_max, LOG_AXIS_MAX, LOG_AXIS_MIN};
pub use compare::compare_view;
pub use controller::Controller;
pub use daily::daily_view;
pub use labels::date_labels;
pub use recompute::recompute;
pub use select::{active_series, MIN_DEATHS};
pub use window::TrainingWindow;
