use axum::{
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, StatusCode},
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::auth::{token_prefix, AuthToken};
use crate::errors::AppError;
use crate::justify::{count_words, justify};
use crate::state::AppState;

/// POST /api/justify
///
/// Checks run in order: bearer token (extractor), body size, content type,
/// body contents, quota.
/// Quota is charged before the text is justified.
pub async fn handle_justify(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<String, AppError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge {
                limit: state.config.max_body_bytes,
            }
        } else {
            AppError::Validation(rejection.body_text())
        }
    })?;

    let is_plain_text = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("text/plain"));
    if !is_plain_text {
        return Err(AppError::Validation(
            "Content-Type must be text/plain".to_string(),
        ));
    }

    let text = String::from_utf8(body.to_vec()).map_err(|_| {
        AppError::Validation("Request body must be valid UTF-8 text".to_string())
    })?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Request body cannot be empty".to_string(),
        ));
    }

    let word_count = count_words(&text) as u64;
    if !state.limiter.check_limit(&token, word_count) {
        warn!(
            token = %token_prefix(&token),
            words = word_count,
            used = state.limiter.current_count(&token),
            limit = state.limiter.max_words_per_day(),
            "Daily word quota exceeded"
        );
        return Err(AppError::QuotaExceeded {
            limit: state.limiter.max_words_per_day(),
            reset_at: state.limiter.reset_time(&token),
        });
    }

    // CPU-bound over the whole body; keep it off the async executor.
    let width = state.config.line_width;
    let justified = tokio::task::spawn_blocking(move || justify(&text, width))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in justify: {e}")))?;

    info!(
        token = %token_prefix(&token),
        words = word_count,
        remaining = state.limiter.remaining_words(&token),
        "Text justified"
    );

    Ok(justified)
}
