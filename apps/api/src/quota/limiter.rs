//! Per-token daily word quota.
//!
//! Usage is bucketed by UTC calendar day. A token's record is replaced the first
//! time it is checked on a new day, so yesterday's usage never carries over.
//! Every operation takes the map lock once, making `check_limit`'s
//! read-modify-write atomic across concurrent requests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Days, NaiveDate, NaiveTime, SecondsFormat, Utc};
use parking_lot::Mutex;

use crate::models::rate_limit::RateLimitRecord;
use crate::quota::clock::{Clock, SystemClock};

pub const DEFAULT_MAX_WORDS_PER_DAY: u64 = 80_000;

pub struct RateLimiter {
    limits: Mutex<HashMap<String, RateLimitRecord>>,
    max_words_per_day: u64,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    pub fn new(max_words_per_day: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limits: Mutex::new(HashMap::new()),
            max_words_per_day,
            clock,
        }
    }

    pub fn with_system_clock(max_words_per_day: u64) -> Self {
        Self::new(max_words_per_day, Arc::new(SystemClock))
    }

    pub fn max_words_per_day(&self) -> u64 {
        self.max_words_per_day
    }

    /// Charges `word_count` words to `token` if the daily quota allows it.
    ///
    /// Returns `false` and leaves the record untouched when the request would
    /// push today's total past the quota. The first request of a day is always
    /// accepted and recorded as the new total, even if it alone exceeds the quota.
    pub fn check_limit(&self, token: &str, word_count: u64) -> bool {
        let now = self.clock.now();
        let today = now.date_naive();
        let mut limits = self.limits.lock();

        match limits.get_mut(token) {
            Some(record) if record.date == today => {
                let new_count = record.word_count.saturating_add(word_count);
                if new_count > self.max_words_per_day {
                    return false;
                }
                record.word_count = new_count;
                true
            }
            _ => {
                limits.insert(
                    token.to_string(),
                    RateLimitRecord {
                        token: token.to_string(),
                        word_count,
                        date: today,
                        reset_at: next_utc_midnight(now),
                    },
                );
                true
            }
        }
    }

    /// Words charged to `token` today. Zero for unknown tokens and stale records.
    pub fn current_count(&self, token: &str) -> u64 {
        let today = self.today();
        self.limits
            .lock()
            .get(token)
            .filter(|record| record.date == today)
            .map_or(0, |record| record.word_count)
    }

    pub fn remaining_words(&self, token: &str) -> u64 {
        self.max_words_per_day
            .saturating_sub(self.current_count(token))
    }

    /// When the quota for `token` resets.
    ///
    /// A stored record's `reset_at` is returned as-is, even when the record is
    /// from a previous day.
    pub fn reset_time(&self, token: &str) -> DateTime<Utc> {
        if let Some(record) = self.limits.lock().get(token) {
            return record.reset_at;
        }
        next_utc_midnight(self.clock.now())
    }

    #[allow(dead_code)] // test isolation and operator resets
    pub fn clear(&self) {
        self.limits.lock().clear();
    }

    /// Drops every record not dated today. Returns how many were removed.
    pub fn cleanup(&self) -> usize {
        let today = self.today();
        let mut limits = self.limits.lock();
        let before = limits.len();
        limits.retain(|_, record| record.date == today);
        before - limits.len()
    }

    /// Number of stored records, stale ones included.
    pub fn len(&self) -> usize {
        self.limits.lock().len()
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }
}

/// 00:00:00 UTC on the calendar day after `now`.
pub fn next_utc_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .checked_add_days(Days::new(1))
        .unwrap_or(NaiveDate::MAX)
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Wire format for reset times: RFC 3339, millisecond precision, `Z` suffix.
pub fn format_reset_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
