use axum::{extract::rejection::JsonRejection, extract::State, Json};
use garde::Validate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// Body of `POST /api/token`.
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[garde(pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /api/token
pub async fn handle_issue_token(
    State(state): State<AppState>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    // Malformed JSON, a missing `email` and a non-string `email` all land here.
    let payload = match payload {
        Ok(Json(payload)) if !payload.email.is_empty() => payload,
        _ => {
            return Err(AppError::Validation(
                "Email is required and must be a string".to_string(),
            ))
        }
    };

    payload
        .validate()
        .map_err(|_| AppError::Validation("Invalid email format".to_string()))?;

    let token = state.tokens.generate_token(&payload.email)?;
    info!(
        token = %super::token_prefix(&token),
        registered = state.tokens.len(),
        "Token issued"
    );

    Ok(Json(TokenResponse { token }))
}
