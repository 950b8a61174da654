//! Token format validation

use once_cell::sync::Lazy;
use regex::Regex;

// Base-62 alphabet, no padding or separators
static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

// SHA-512 digest, lowercase hex
static SHA512_HEX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-f]{128}$").unwrap());

/// Check that a token consists only of base-62 characters
pub fn is_alphanumeric_token(token: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(token)
}

/// Check a submitted token against the alphabet and a maximum length
pub fn is_well_formed_token(token: &str, max_length: usize) -> bool {
    !token.is_empty() && token.len() <= max_length && is_alphanumeric_token(token)
}

/// Check that a value looks like a stored database hash
pub fn is_database_hash(value: &str) -> bool {
    SHA512_HEX_REGEX.is_match(value)
}
