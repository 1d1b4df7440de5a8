// Daily word quota per token, with an injectable clock and a periodic sweep
// of records left over from previous days.

pub mod clock;
pub mod handlers;
pub mod limiter;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

pub use limiter::{format_reset_time, RateLimiter, DEFAULT_MAX_WORDS_PER_DAY};

/// Runs `RateLimiter::cleanup` every `period` until the runtime shuts down.
pub fn spawn_cleanup_task(limiter: Arc<RateLimiter>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately; skip it so the sweep waits a full period.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = limiter.cleanup();
            if removed > 0 {
                info!(removed, remaining = limiter.len(), "Swept stale rate limit records");
            }
        }
    })
}
