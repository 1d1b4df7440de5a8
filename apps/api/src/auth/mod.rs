// Bearer tokens: issue per email, validate on every authenticated request.

pub mod extractor;
pub mod handlers;
pub mod registry;

pub use extractor::AuthToken;
pub use registry::TokenRegistry;

/// Leading characters of a token, safe to put in logs.
pub fn token_prefix(token: &str) -> &str {
    token.get(..8).unwrap_or(token)
}
