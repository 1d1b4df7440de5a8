use std::sync::Arc;

use crate::auth::TokenRegistry;
use crate::config::Config;
use crate::quota::RateLimiter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub tokens: Arc<TokenRegistry>,
    /// Daily word quota. Also swept by the background cleanup task.
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let limiter = RateLimiter::with_system_clock(config.max_words_per_day);
        Self::with_limiter(config, limiter)
    }

    pub fn with_limiter(config: Config, limiter: RateLimiter) -> Self {
        Self {
            config,
            tokens: Arc::new(TokenRegistry::new()),
            limiter: Arc::new(limiter),
        }
    }
}
