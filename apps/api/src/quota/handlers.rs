use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::AuthToken;
use crate::errors::AppError;
use crate::quota::format_reset_time;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UsageResponse {
    pub email: String,
    pub word_count: u64,
    pub remaining_words: u64,
    pub max_words_per_day: u64,
    /// Same format as the reset time in the 402 message.
    pub reset_at: String,
}

/// GET /api/usage
/// Reports today's quota usage for the caller. Never charges words.
pub async fn handle_usage(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
) -> Result<Json<UsageResponse>, AppError> {
    // The extractor validated the token, but the registry may be cleared in between.
    let record = state
        .tokens
        .get_token_data(&token)
        .ok_or(AppError::InvalidToken)?;

    Ok(Json(UsageResponse {
        email: record.email,
        word_count: state.limiter.current_count(&token),
        remaining_words: state.limiter.remaining_words(&token),
        max_words_per_day: state.limiter.max_words_per_day(),
        reset_at: format_reset_time(state.limiter.reset_time(&token)),
    }))
}
