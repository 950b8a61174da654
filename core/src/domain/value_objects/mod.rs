//! Value objects: immutable values describing an issuance.

pub mod expiry_window;
pub mod token_options;
pub mod token_purpose;

pub use expiry_window::ExpiryWindow;
pub use token_options::{TokenOptions, MAX_EXPIRY_MINUTES, MAX_TOKEN_LENGTH};
pub use token_purpose::TokenPurpose;
