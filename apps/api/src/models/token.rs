use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issued bearer token and the email it belongs to. Never mutated after issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub email: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
}
