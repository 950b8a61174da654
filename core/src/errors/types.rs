//! Token and validation error types

use ott_shared::error_codes;
use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The secure random source could not be read
    #[error("Token generation failed: {reason}")]
    TokenGenerationFailed { reason: String },

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,
}

impl TokenError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::TokenGenerationFailed { .. } => error_codes::TOKEN_GENERATION_FAILED,
            TokenError::InvalidTokenFormat => error_codes::TOKEN_INVALID_FORMAT,
            TokenError::InvalidToken => error_codes::TOKEN_INVALID,
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
        }
    }
}

/// Configuration and input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Value out of range for field: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { .. } => error_codes::OUT_OF_RANGE,
        }
    }
}
