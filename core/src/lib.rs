//! # One-time token core
//!
//! Issues short-lived, single-use verification tokens for email confirmation
//! and password reset. A [`TokenIssuer`] produces a user-facing token and a
//! database hash and answers whether an issuance instant is still inside its
//! validity window; [`TokenVerificationService`] wraps it into an
//! issue/verify workflow whose records the caller persists.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
