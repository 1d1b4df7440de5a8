pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::errors::AppError;
use crate::justify::handlers as justify_handlers;
use crate::quota::handlers as quota_handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!(
        "The requested endpoint does not exist: {}",
        uri.path()
    ))
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/token", post(auth_handlers::handle_issue_token))
        .route("/api/justify", post(justify_handlers::handle_justify))
        .route("/api/usage", get(quota_handlers::handle_usage))
        .fallback(not_found)
        // Body size is governed by config rather than axum's built-in 2 MB default.
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
