//! Dashboard Facade
//!
//! Unified re-exports for the forecast dashboard:
//! - `dashboard_spi` - Filters, UI state, chart views and errors
//! - `dashboard_core` - Controller, URL-fragment codec and recompute

// Re-export everything from SPI
pub use dashboard_spi::*;

// Re-export everything from Core
pub use dashboard_core::{
    active_series, axis, axis_spec, compare, compare_view, controller, daily, daily_view,
    date_labels, hash, labels, linear_axis_max, recompute, select, window, Controller,
    TrainingWindow, LOG_AXIS_MAX, LOG_AXIS_MIN, MIN_DEATHS,
};
