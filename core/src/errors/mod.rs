//! Domain-specific error types and error handling.

mod types;

pub use types::{TokenError, ValidationError};

use ott_shared::error_codes;
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Token(err) => err.error_code(),
            DomainError::ValidationErr(err) => err.error_code(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
