//! Issuance options for a single token

use ott_shared::config::{TokenConfig, DEFAULT_EXPIRY_MINUTES, DEFAULT_TOKEN_LENGTH};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Upper bound for the user-facing token length
pub const MAX_TOKEN_LENGTH: usize = 512;

/// Upper bound for the validity window (one year)
pub const MAX_EXPIRY_MINUTES: i64 = 60 * 24 * 365;

/// Length and validity window for one issuance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenOptions {
    /// Characters in the user-facing token
    #[serde(default = "default_token_length")]
    pub token_length: usize,

    /// Minutes the token stays valid after issuance
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,
}

impl Default for TokenOptions {
    fn default() -> Self {
        Self {
            token_length: DEFAULT_TOKEN_LENGTH,
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
        }
    }
}

impl TokenOptions {
    pub fn with_token_length(mut self, token_length: usize) -> Self {
        self.token_length = token_length;
        self
    }

    pub fn with_expiry_minutes(mut self, expiry_minutes: i64) -> Self {
        self.expiry_minutes = expiry_minutes;
        self
    }

    /// Reject zero, negative and oversized values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_TOKEN_LENGTH).contains(&self.token_length) {
            return Err(ValidationError::OutOfRange {
                field: "token_length".to_string(),
                min: "1".to_string(),
                max: MAX_TOKEN_LENGTH.to_string(),
            });
        }

        if !(1..=MAX_EXPIRY_MINUTES).contains(&self.expiry_minutes) {
            return Err(ValidationError::OutOfRange {
                field: "expiry_minutes".to_string(),
                min: "1".to_string(),
                max: MAX_EXPIRY_MINUTES.to_string(),
            });
        }

        Ok(())
    }
}

impl From<&TokenConfig> for TokenOptions {
    fn from(config: &TokenConfig) -> Self {
        Self {
            token_length: config.token_length,
            expiry_minutes: config.expiry_minutes,
        }
    }
}

impl From<TokenConfig> for TokenOptions {
    fn from(config: TokenConfig) -> Self {
        Self::from(&config)
    }
}

fn default_token_length() -> usize {
    DEFAULT_TOKEN_LENGTH
}

fn default_expiry_minutes() -> i64 {
    DEFAULT_EXPIRY_MINUTES
}
