//! Validity window arithmetic

use chrono::{DateTime, Duration, TimeZone, Utc};

/// A validity window measured in whole minutes
///
/// An instant is inside the window while fewer than `minutes` whole minutes
/// separate it from the issuance instant. Partial minutes are truncated, so
/// a token issued exactly `minutes` minutes ago is already outside. The
/// separation is absolute: an issuance instant that lies a full window in
/// the future is outside as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryWindow {
    minutes: i64,
}

impl ExpiryWindow {
    pub fn new(minutes: i64) -> Self {
        Self { minutes }
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Whole minutes between `issued_at` and `now`
    pub fn elapsed_minutes<Tz1, Tz2>(issued_at: &DateTime<Tz1>, now: &DateTime<Tz2>) -> i64
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        let issued = issued_at.with_timezone(&Utc);
        let now = now.with_timezone(&Utc);
        now.signed_duration_since(issued).num_minutes().abs()
    }

    /// Whether `now` is still inside the window opened at `issued_at`
    pub fn contains<Tz1, Tz2>(&self, issued_at: &DateTime<Tz1>, now: &DateTime<Tz2>) -> bool
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        Self::elapsed_minutes(issued_at, now) < self.minutes
    }

    /// First instant at which a token issued at `issued_at` is expired
    ///
    /// Saturates at the latest representable instant.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> DateTime<Utc> {
        Duration::try_minutes(self.minutes)
            .and_then(|window| issued_at.checked_add_signed(window))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
