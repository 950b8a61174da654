//! Single-use token issuer for email verification and password reset.

use chrono::{DateTime, TimeZone, Utc};
use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::domain::entities::issued_token::IssuedToken;
use crate::domain::value_objects::{ExpiryWindow, TokenOptions, TokenPurpose};
use crate::errors::DomainResult;
use crate::services::crypto;

/// Issues exactly one random token together with its database hash
///
/// The token and hash are generated when the issuer is constructed and never
/// change afterwards, so an issuer can be shared across threads freely.
/// The plaintext token goes to the end user; only the hash and the issuance
/// instant should be persisted.
pub struct TokenIssuer {
    token_length: usize,
    window: ExpiryWindow,
    token: String,
    hash: String,
}

impl TokenIssuer {
    /// Creates an issuer and generates its token from the OS CSPRNG
    ///
    /// # Arguments
    ///
    /// * `options` - Token length and validity window
    ///
    /// # Returns
    ///
    /// * `Ok(TokenIssuer)` - Issuer holding a fresh token and hash
    /// * `Err(DomainError)` - Options out of range, or the random source failed
    pub fn new(options: TokenOptions) -> DomainResult<Self> {
        Self::from_rng(options, &mut OsRng)
    }

    /// Creates an issuer with 24-character tokens valid for 15 minutes
    pub fn with_defaults() -> DomainResult<Self> {
        Self::new(TokenOptions::default())
    }

    /// Creates an issuer drawing its randomness from `rng`
    pub fn from_rng<R>(options: TokenOptions, rng: &mut R) -> DomainResult<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        options.validate()?;

        let token = crypto::generate_alphanumeric_with(rng, options.token_length)?;
        let hash = Self::hash_from_token(&token);

        tracing::debug!(
            token_length = options.token_length,
            expiry_minutes = options.expiry_minutes,
            event = "token_generated",
            "Generated single-use token"
        );

        Ok(Self {
            token_length: options.token_length,
            window: ExpiryWindow::new(options.expiry_minutes),
            token,
            hash,
        })
    }

    /// The user-facing token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// SHA-512 of the token, 128 lowercase hex characters
    pub fn database_hash(&self) -> &str {
        &self.hash
    }

    pub fn token_length(&self) -> usize {
        self.token_length
    }

    pub fn expiry_minutes(&self) -> i64 {
        self.window.minutes()
    }

    /// Hash any token the way [`TokenIssuer::database_hash`] is derived
    pub fn hash_from_token(token: &str) -> String {
        crypto::sha512_hex(token)
    }

    /// Whether a token issued at `issued_at` is still inside this issuer's
    /// validity window
    pub fn still_valid<Tz: TimeZone>(&self, issued_at: DateTime<Tz>) -> bool {
        self.still_valid_at(issued_at, Utc::now())
    }

    /// [`TokenIssuer::still_valid`] evaluated against a given `now`
    pub fn still_valid_at<Tz1, Tz2>(&self, issued_at: DateTime<Tz1>, now: DateTime<Tz2>) -> bool
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        self.window.contains(&issued_at, &now)
    }

    /// Record to persist for this issuance
    pub fn record<Tz: TimeZone>(&self, purpose: TokenPurpose, issued_at: DateTime<Tz>) -> IssuedToken {
        IssuedToken::new(
            purpose,
            self.hash.clone(),
            issued_at.with_timezone(&Utc),
            self.window.minutes(),
        )
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("token_length", &self.token_length)
            .field("expiry_minutes", &self.window.minutes())
            .field("token", &"[redacted]")
            .finish()
    }
}
