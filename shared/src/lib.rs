//! Shared configuration and utilities for the one-time token crates
//!
//! This crate provides:
//! - Configuration types (token settings, environment, logging)
//! - Logging initialisation
//! - Token format validation helpers
//! - Stable error codes

pub mod config;
pub mod errors;
pub mod logging;
pub mod utils;

pub use config::{
    AppConfig, Environment, LogFormat, LoggingConfig, TokenConfig, DEFAULT_EXPIRY_MINUTES,
    DEFAULT_TOKEN_LENGTH,
};
pub use errors::error_codes;
pub use logging::init_logging;
pub use utils::validation;
