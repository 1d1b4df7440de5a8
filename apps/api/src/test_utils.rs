//! Shared test fixtures for handler and router tests.
//!
//! ```ignore
//! use crate::test_utils::{test_state, test_state_with_quota};
//!
//! let state = test_state_with_quota(100);
//! let token = state.tokens.generate_token("test@example.com").unwrap();
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};

use crate::config::Config;
use crate::quota::clock::ManualClock;
use crate::quota::{RateLimiter, DEFAULT_MAX_WORDS_PER_DAY};
use crate::state::AppState;

/// Creates a test configuration with default values.
pub fn test_config() -> Config {
    Config {
        port: 3000,
        rust_log: "debug".to_string(),
        max_words_per_day: DEFAULT_MAX_WORDS_PER_DAY,
        line_width: 80,
        max_body_bytes: 2 * 1024 * 1024,
        cleanup_interval: Duration::from_secs(3600),
    }
}

/// State with the default quota and a clock pinned to midday UTC.
pub fn test_state() -> AppState {
    test_state_with_quota(DEFAULT_MAX_WORDS_PER_DAY)
}

/// State with a custom daily quota and a clock pinned to midday UTC.
pub fn test_state_with_quota(max_words_per_day: u64) -> AppState {
    let (state, _clock) = test_state_with_clock(max_words_per_day);
    state
}

/// Like [`test_state_with_quota`], also returning the clock so tests can cross midnight.
pub fn test_state_with_clock(max_words_per_day: u64) -> (AppState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
    ));
    let mut config = test_config();
    config.max_words_per_day = max_words_per_day;
    let limiter = RateLimiter::new(max_words_per_day, clock.clone());
    (AppState::with_limiter(config, limiter), clock)
}
