//! Persistable record of an issued token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{ExpiryWindow, TokenPurpose};
use crate::services::crypto;

/// What the caller stores after issuing a token
///
/// Holds the database hash, never the plaintext token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Unique identifier for the issuance
    pub id: Uuid,

    /// Workflow the token belongs to
    pub purpose: TokenPurpose,

    /// SHA-512 of the token, lowercase hex
    pub token_hash: String,

    /// Instant the token was issued
    pub issued_at: DateTime<Utc>,

    /// Validity window in minutes at the time of issuance
    pub expiry_minutes: i64,
}

impl IssuedToken {
    pub fn new(
        purpose: TokenPurpose,
        token_hash: String,
        issued_at: DateTime<Utc>,
        expiry_minutes: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            purpose,
            token_hash,
            issued_at,
            expiry_minutes,
        }
    }

    fn window(&self) -> ExpiryWindow {
        ExpiryWindow::new(self.expiry_minutes)
    }

    /// First instant at which the token is no longer accepted
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.window().expires_at(self.issued_at)
    }

    /// Checks if the token has expired relative to `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        !self.window().contains(&self.issued_at, &now)
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Whether `submitted` hashes to the stored hash
    ///
    /// The digests are compared in constant time.
    pub fn matches(&self, submitted: &str) -> bool {
        let submitted_hash = crypto::sha512_hex(submitted);
        crypto::constant_time_compare(&submitted_hash, &self.token_hash)
    }
}
