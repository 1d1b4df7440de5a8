use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Words consumed by one token on one UTC calendar day.
///
/// A record whose `date` is not today is stale and counts as zero usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitRecord {
    pub token: String,
    pub word_count: u64,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub reset_at: DateTime<Utc>,
}
