use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::justify::DEFAULT_LINE_WIDTH;
use crate::quota::DEFAULT_MAX_WORDS_PER_DAY;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 3600;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Per-token daily quota (`RATE_LIMIT_WORDS_PER_DAY`).
    pub max_words_per_day: u64,
    pub line_width: usize,
    pub max_body_bytes: usize,
    pub cleanup_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let line_width: usize = parse_or(&lookup, "JUSTIFY_LINE_WIDTH", DEFAULT_LINE_WIDTH)?;
        if line_width == 0 {
            bail!("JUSTIFY_LINE_WIDTH must be greater than zero");
        }

        let cleanup_secs: u64 =
            parse_or(&lookup, "CLEANUP_INTERVAL_SECS", DEFAULT_CLEANUP_INTERVAL_SECS)?;
        if cleanup_secs == 0 {
            bail!("CLEANUP_INTERVAL_SECS must be greater than zero");
        }

        Ok(Config {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_words_per_day: parse_or(
                &lookup,
                "RATE_LIMIT_WORDS_PER_DAY",
                DEFAULT_MAX_WORDS_PER_DAY,
            )?,
            line_width,
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            cleanup_interval: Duration::from_secs(cleanup_secs),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
