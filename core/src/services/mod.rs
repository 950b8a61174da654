//! Services built on the domain layer.

pub mod crypto;
pub mod verification;

pub use verification::{IssueTokenResult, TokenVerificationService, VerificationServiceConfig};
