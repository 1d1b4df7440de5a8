mod auth;
mod config;
mod errors;
mod justify;
mod models;
mod quota;
mod routes;
mod state;
#[cfg(test)]
mod test_utils;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::quota::spawn_cleanup_task;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Justify API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        max_words_per_day = config.max_words_per_day,
        line_width = config.line_width,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    // Build app state
    let state = AppState::new(config.clone());

    // Background sweep of rate limit records from previous days
    let _cleanup = spawn_cleanup_task(state.limiter.clone(), config.cleanup_interval);
    info!(
        "Rate limit cleanup every {}s",
        config.cleanup_interval.as_secs()
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
