//! Error types for the dashboard

mod dashboard_error;

pub use dashboard_error::{DashboardError, Result};
