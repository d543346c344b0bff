//! # charts-server
//!
//! Serves the merged upstream feeds at `/` and the computed chart views
//! under `/api/v1`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use source_facade::{HttpSeriesSource, SourceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod routes;

use routes::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charts_server=info,source_core=info,tower_http=info".into()),
        )
        .init();

    let config = SourceConfig::from_env()?;
    tracing::info!(
        provider = ?config.global_provider,
        cache_ttl_secs = config.cache_ttl_secs,
        "upstream feeds configured"
    );
    let source = HttpSeriesSource::new(config)?;
    let app = create_router(AppState::new(Arc::new(source)));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8081".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid number: {}", e))?;
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    tracing::info!("charts-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
