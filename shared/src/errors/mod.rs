//! Shared error codes

/// Stable machine-readable codes for token and validation failures
pub mod error_codes {
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const TOKEN_GENERATION_FAILED: &str = "TOKEN_GENERATION_FAILED";
    pub const TOKEN_INVALID_FORMAT: &str = "TOKEN_INVALID_FORMAT";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
}
