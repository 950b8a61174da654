//! Configuration for the token verification service

use ott_shared::config::TokenConfig;

use crate::domain::value_objects::TokenOptions;

/// Configuration for the token verification service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationServiceConfig {
    /// Length and validity window of issued tokens
    pub options: TokenOptions,
}

impl VerificationServiceConfig {
    pub fn new(options: TokenOptions) -> Self {
        Self { options }
    }
}

impl From<&TokenConfig> for VerificationServiceConfig {
    fn from(config: &TokenConfig) -> Self {
        Self::new(TokenOptions::from(config))
    }
}
