use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde_json::json;
use thiserror::Error;

use crate::quota::format_reset_time;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing or invalid authorization header")]
    MissingCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Daily quota of {limit} words exceeded")]
    QuotaExceeded {
        limit: u64,
        reset_at: DateTime<Utc>,
    },

    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MissingCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::QuotaExceeded { .. } => StatusCode::PAYMENT_REQUIRED,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::MissingCredentials => {
                "Missing or invalid authorization header. Use: Authorization: Bearer <token>"
                    .to_string()
            }
            AppError::InvalidToken => "Invalid or expired token".to_string(),
            AppError::QuotaExceeded { limit, reset_at } => format!(
                "Rate limit exceeded. Daily limit is {} words. Resets at {}",
                group_thousands(*limit),
                format_reset_time(*reset_at)
            ),
            AppError::PayloadTooLarge { limit } => format!(
                "Request body exceeds the {} byte limit",
                group_thousands(*limit as u64)
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": message
        }));

        (status, body).into_response()
    }
}

/// Formats `n` with comma thousands separators: `80000` → `"80,000"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
