//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `token` - Token length and validity window

pub mod environment;
pub mod token;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use token::{TokenConfig, DEFAULT_EXPIRY_MINUTES, DEFAULT_TOKEN_LENGTH};

/// Complete configuration for a process that issues tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Token issuance settings
    #[serde(default)]
    pub token: TokenConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Logging settings follow the detected environment.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            token: TokenConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }
}
