//! In-memory bearer token registry.
//!
//! One token per email for the lifetime of the process. Tokens are 32 bytes
//! from the OS RNG, hex-encoded.

use std::collections::HashMap;

use anyhow::anyhow;
use chrono::Utc;
use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::AppError;
use crate::models::token::TokenRecord;

const TOKEN_BYTES: usize = 32;

#[derive(Default)]
struct Inner {
    by_token: HashMap<String, TokenRecord>,
    /// email → token, kept in lockstep with `by_token`.
    by_email: HashMap<String, String>,
}

#[derive(Default)]
pub struct TokenRegistry {
    inner: Mutex<Inner>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the token for `email`, issuing one on first use.
    ///
    /// Repeat calls for the same email return the same token without touching
    /// the RNG. Fails only if the OS randomness source does.
    pub fn generate_token(&self, email: &str) -> Result<String, AppError> {
        let mut inner = self.inner.lock();

        if let Some(existing) = inner.by_email.get(email) {
            return Ok(existing.clone());
        }

        let token = random_token()?;
        inner.by_email.insert(email.to_string(), token.clone());
        inner.by_token.insert(
            token.clone(),
            TokenRecord {
                email: email.to_string(),
                token: token.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(token)
    }

    pub fn validate_token(&self, token: &str) -> bool {
        self.inner.lock().by_token.contains_key(token)
    }

    pub fn get_token_data(&self, token: &str) -> Option<TokenRecord> {
        self.inner.lock().by_token.get(token).cloned()
    }

    #[allow(dead_code)] // test isolation and operator resets
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.by_token.clear();
        inner.by_email.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().by_token.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn random_token() -> Result<String, AppError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AppError::Internal(anyhow!("OS randomness source failed: {e}")))?;
    Ok(hex::encode(bytes))
}
