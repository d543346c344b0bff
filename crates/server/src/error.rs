//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dashboard_facade::DashboardError;
use serde::Serialize;
use source_facade::SourceError;

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

/// Handler error.
#[derive(Debug)]
pub enum AppError {
    /// Bad query or a filter with no data
    Dashboard(DashboardError),
    /// Upstream fetch or parse failure
    Source(SourceError),
}

impl AppError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Dashboard(DashboardError::EmptySeries(_)) => {
                (StatusCode::NOT_FOUND, "EMPTY_SERIES")
            }
            AppError::Dashboard(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Source(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        let message = match &self {
            AppError::Dashboard(e) => e.to_string(),
            AppError::Source(e) => {
                tracing::warn!(error = %e, "upstream request failed");
                e.to_string()
            }
        };
        (status, Json(ApiError { code, message })).into_response()
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        AppError::Dashboard(err)
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        AppError::Source(err)
    }
}
