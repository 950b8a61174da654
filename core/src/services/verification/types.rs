//! Types for verification service results

use chrono::{DateTime, Utc};

use crate::domain::entities::IssuedToken;

/// Result of issuing a token
///
/// `token` is handed to the delivery layer, `record` to the caller's store.
#[derive(Clone)]
pub struct IssueTokenResult {
    /// Plaintext token for the end user
    pub token: String,
    /// Record to persist
    pub record: IssuedToken,
}

impl IssueTokenResult {
    /// When the issued token stops being accepted
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.record.expires_at()
    }
}

impl std::fmt::Debug for IssueTokenResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssueTokenResult")
            .field("token", &"[redacted]")
            .field("record", &self.record)
            .finish()
    }
}
