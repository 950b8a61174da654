//! What an issued token is for

use serde::{Deserialize, Serialize};

/// Workflow a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPurpose {
    /// Confirming ownership of an email address
    EmailVerification,
    /// Authorising a password change
    PasswordReset,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::EmailVerification => "email_verification",
            TokenPurpose::PasswordReset => "password_reset",
        }
    }
}

impl std::fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TokenPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email_verification" => Ok(TokenPurpose::EmailVerification),
            "password_reset" => Ok(TokenPurpose::PasswordReset),
            _ => Err(format!("Invalid token purpose: {}", s)),
        }
    }
}
