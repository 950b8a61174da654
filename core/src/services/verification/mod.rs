//! Token verification service
//!
//! This module provides the issuance and verification workflow on top of
//! [`crate::domain::entities::TokenIssuer`]:
//! - Token issuance with a persistable record
//! - Format checks on submitted tokens
//! - Constant-time hash comparison
//! - Validity window evaluation

mod config;
mod service;
mod types;


pub use config::VerificationServiceConfig;
pub use service::TokenVerificationService;
pub use types::IssueTokenResult;
