//! Bearer-token extractor.
//!
//! Add `AuthToken` as a handler parameter to require a registered token:
//!
//! ```ignore
//! async fn my_handler(AuthToken(token): AuthToken, ...) -> ... {
//!     // token is known to the registry here
//! }
//! ```

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::errors::AppError;
use crate::state::AppState;

/// A bearer token that was present in `Authorization` and is registered.
#[derive(Debug, Clone)]
pub struct AuthToken(pub String);

/// Everything after a case-sensitive `Bearer ` prefix, untrimmed.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[async_trait]
impl FromRequestParts<AppState> for AuthToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::MissingCredentials)?;

        if !state.tokens.validate_token(token) {
            tracing::debug!(token = %super::token_prefix(token), "Rejected unknown token");
            return Err(AppError::InvalidToken);
        }

        Ok(AuthToken(token.to_string()))
    }
}
