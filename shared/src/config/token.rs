//! Token issuance configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default number of characters in a user-facing token
pub const DEFAULT_TOKEN_LENGTH: usize = 24;

/// Default validity window in minutes
pub const DEFAULT_EXPIRY_MINUTES: i64 = 15;

/// Token issuance settings as loaded from the environment or a config file
///
/// Values are not range-checked here; the issuer validates them when a
/// token is generated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Length of the user-facing token in characters
    #[serde(default = "default_token_length")]
    pub token_length: usize,

    /// Minutes a token stays valid after issuance
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            token_length: DEFAULT_TOKEN_LENGTH,
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
        }
    }
}

impl TokenConfig {
    /// Load from `TOKEN_LENGTH` and `TOKEN_EXPIRY_MINUTES`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let token_length = lookup("TOKEN_LENGTH")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TOKEN_LENGTH);
        let expiry_minutes = lookup("TOKEN_EXPIRY_MINUTES")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_EXPIRY_MINUTES);

        Self {
            token_length,
            expiry_minutes,
        }
    }

    pub fn with_token_length(mut self, token_length: usize) -> Self {
        self.token_length = token_length;
        self
    }

    pub fn with_expiry_minutes(mut self, expiry_minutes: i64) -> Self {
        self.expiry_minutes = expiry_minutes;
        self
    }
}

fn default_token_length() -> usize {
    DEFAULT_TOKEN_LENGTH
}

fn default_expiry_minutes() -> i64 {
    DEFAULT_EXPIRY_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TokenConfig::default();
        assert_eq!(config.token_length, 24);
        assert_eq!(config.expiry_minutes, 15);
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = TokenConfig::from_lookup(lookup_from(&[
            ("TOKEN_LENGTH", "32"),
            ("TOKEN_EXPIRY_MINUTES", " 60 "),
        ]));
        assert_eq!(config.token_length, 32);
        assert_eq!(config.expiry_minutes, 60);
    }

    #[test]
    fn test_from_lookup_falls_back_on_garbage() {
        let config = TokenConfig::from_lookup(lookup_from(&[
            ("TOKEN_LENGTH", "long"),
            ("TOKEN_EXPIRY_MINUTES", "-"),
        ]));
        assert_eq!(config, TokenConfig::default());
    }

    #[test]
    fn test_from_lookup_keeps_non_positive_values() {
        // Range checks belong to the issuer
        let config = TokenConfig::from_lookup(lookup_from(&[("TOKEN_EXPIRY_MINUTES", "-5")]));
        assert_eq!(config.expiry_minutes, -5);
        assert_eq!(config.token_length, DEFAULT_TOKEN_LENGTH);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: TokenConfig = serde_json::from_str(r#"{"expiry_minutes":30}"#).unwrap();
        assert_eq!(config.token_length, 24);
        assert_eq!(config.expiry_minutes, 30);
    }
}
