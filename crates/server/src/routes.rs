//! Router and API route handlers

use std::sync::Arc;

use axum::{
    extract::{Query, RawQuery, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use dashboard_facade::{hash, CompareView, Controller, CumulativeView, DailyView};
use serde::Deserialize;
use series_spi::SeriesSet;
use source_facade::{MergedResponse, SeriesSource};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;

type HandlerResult<T> = Result<Json<T>, AppError>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn SeriesSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn SeriesSource>) -> Self {
        Self { source }
    }

    async fn series_set(&self) -> Result<SeriesSet, AppError> {
        Ok(self.source.fetch_all_series().await?)
    }
}

/// Training window; the other chart parameters share the fragment keys.
#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    pub window: Option<usize>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Merged upstream feeds
        .route("/", get(merged))
        // Health endpoints
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/health", get(liveness))
        // Charts
        .route("/api/v1/cumulative", get(cumulative))
        .route("/api/v1/daily", get(daily))
        .route("/api/v1/compare", get(compare))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Liveness probe - is the server running?
async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - can the upstream feeds be read?
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let (status, label) = match state.source.fetch_all_series().await {
        Ok(_) => (StatusCode::OK, "ready"),
        Err(e) => {
            tracing::warn!(source = state.source.name(), error = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };
    (
        status,
        Json(serde_json::json!({
            "status": label,
            "source": state.source.name(),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /
async fn merged(State(state): State<AppState>) -> HandlerResult<MergedResponse> {
    let observations = state.source.fetch_observations().await?;
    Ok(Json(MergedResponse::from_observations(&observations)))
}

/// GET /api/v1/cumulative?filterCumulative=&forecast=&scale=&window=
async fn cumulative(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    Query(params): Query<WindowQuery>,
) -> HandlerResult<CumulativeView> {
    let ui = hash::decode(query.as_deref().unwrap_or_default())?;
    let mut controller = Controller::new(state.series_set().await?, ui);
    let view = match params.window {
        Some(k) => controller.on_slider(k)?,
        None => controller.refresh()?,
    };
    Ok(Json(view))
}

/// GET /api/v1/daily?filterDaily=&forecast=
async fn daily(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> HandlerResult<DailyView> {
    let ui = hash::decode(query.as_deref().unwrap_or_default())?;
    let controller = Controller::new(state.series_set().await?, ui);
    Ok(Json(controller.daily()?))
}

/// GET /api/v1/compare
async fn compare(State(state): State<AppState>) -> HandlerResult<CompareView> {
    let controller = Controller::new(state.series_set().await?, Default::default());
    Ok(Json(controller.compare()))
}
