use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "justify-api"
    }))
}

/// GET /
/// Lists the public endpoints.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Text Justification API",
        "endpoints": {
            "POST /api/token": "Generate authentication token",
            "POST /api/justify": "Justify text (requires authentication)",
            "GET /api/usage": "Show today's word quota usage (requires authentication)"
        }
    }))
}
