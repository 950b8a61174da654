//! Main verification service implementation

use chrono::{DateTime, Utc};
use ott_shared::config::TokenConfig;
use ott_shared::validation::{is_database_hash, is_well_formed_token};

use crate::domain::entities::{IssuedToken, TokenIssuer};
use crate::domain::value_objects::{TokenPurpose, MAX_EXPIRY_MINUTES, MAX_TOKEN_LENGTH};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::VerificationServiceConfig;
use super::types::IssueTokenResult;

/// Issues tokens and checks submitted tokens against stored records
///
/// Storage and delivery stay with the caller: `issue` hands back the
/// plaintext token and the record to persist, `verify` takes a submitted
/// token and the record loaded back from storage.
#[derive(Debug, Clone)]
pub struct TokenVerificationService {
    config: VerificationServiceConfig,
}

impl TokenVerificationService {
    /// Create a new verification service
    ///
    /// Options are validated up front so that misconfiguration surfaces at
    /// startup rather than on the first issuance.
    pub fn new(config: VerificationServiceConfig) -> DomainResult<Self> {
        config.options.validate()?;
        Ok(Self { config })
    }

    /// Create a service from loaded token configuration
    pub fn from_token_config(config: &TokenConfig) -> DomainResult<Self> {
        Self::new(VerificationServiceConfig::from(config))
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Validity window of newly issued tokens, for "expires in N minutes" copy
    pub fn expiry_minutes(&self) -> i64 {
        self.config.options.expiry_minutes
    }

    /// Issue a new token for `purpose`, stamped with the current time
    ///
    /// # Returns
    ///
    /// * `Ok(IssueTokenResult)` - Plaintext token and the record to persist
    /// * `Err(DomainError)` - The secure random source failed
    pub fn issue(&self, purpose: TokenPurpose) -> DomainResult<IssueTokenResult> {
        self.issue_at(purpose, Utc::now())
    }

    /// Issue a new token stamped with `issued_at`
    pub fn issue_at(
        &self,
        purpose: TokenPurpose,
        issued_at: DateTime<Utc>,
    ) -> DomainResult<IssueTokenResult> {
        let issuer = TokenIssuer::new(self.config.options)?;
        let record = issuer.record(purpose, issued_at);

        tracing::info!(
            record_id = %record.id,
            purpose = %purpose,
            expiry_minutes = record.expiry_minutes,
            event = "token_issued",
            "Issued single-use token"
        );

        Ok(IssueTokenResult {
            token: issuer.token().to_string(),
            record,
        })
    }

    /// Check a submitted token against a stored record
    ///
    /// # Arguments
    ///
    /// * `submitted` - Token as received from the end user
    /// * `record` - Record persisted at issuance
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Token matches and is inside its window
    /// * `Err(TokenError::InvalidTokenFormat)` - Not a base-62 string of sane length
    /// * `Err(TokenError::InvalidToken)` - Hash does not match
    /// * `Err(TokenError::TokenExpired)` - Window has elapsed
    /// * `Err(DomainError::Internal)` - Stored hash is not a SHA-512 hex digest,
    ///   or the stored window is outside the accepted range
    pub fn verify(&self, submitted: &str, record: &IssuedToken) -> DomainResult<()> {
        self.verify_at(submitted, record, Utc::now())
    }

    /// [`TokenVerificationService::verify`] evaluated against a given `now`
    pub fn verify_at(
        &self,
        submitted: &str,
        record: &IssuedToken,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if !is_well_formed_token(submitted, MAX_TOKEN_LENGTH) {
            tracing::warn!(
                record_id = %record.id,
                purpose = %record.purpose,
                submitted_length = submitted.len(),
                event = "token_malformed",
                "Rejected malformed token"
            );
            return Err(TokenError::InvalidTokenFormat.into());
        }

        if !is_database_hash(&record.token_hash) {
            tracing::error!(
                record_id = %record.id,
                event = "stored_hash_malformed",
                "Stored token hash is not a SHA-512 hex digest"
            );
            return Err(DomainError::Internal {
                message: format!("Malformed token hash for record {}", record.id),
            });
        }

        if !(1..=MAX_EXPIRY_MINUTES).contains(&record.expiry_minutes) {
            tracing::error!(
                record_id = %record.id,
                expiry_minutes = record.expiry_minutes,
                event = "stored_window_malformed",
                "Stored expiry window is out of range"
            );
            return Err(DomainError::Internal {
                message: format!(
                    "Expiry window of {} minutes out of range for record {}",
                    record.expiry_minutes, record.id
                ),
            });
        }

        if !record.matches(submitted) {
            tracing::warn!(
                record_id = %record.id,
                purpose = %record.purpose,
                event = "token_mismatch",
                "Submitted token does not match stored hash"
            );
            return Err(TokenError::InvalidToken.into());
        }

        if record.is_expired_at(now) {
            tracing::warn!(
                record_id = %record.id,
                purpose = %record.purpose,
                issued_at = %record.issued_at,
                expiry_minutes = record.expiry_minutes,
                event = "token_expired",
                "Submitted token has expired"
            );
            return Err(TokenError::TokenExpired.into());
        }

        tracing::info!(
            record_id = %record.id,
            purpose = %record.purpose,
            event = "token_verified",
            "Token verified"
        );

        Ok(())
    }
}
