//! Session Entity
//!
//! Server-side record of a logged-in client. All time-dependent checks take
//! `now` as an argument; the caller decides where time comes from.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::{session_id::SessionId, user_id::UserId};

/// Stored session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Digest of the client's token
    pub id: SessionId,
    /// Owner
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Start a session at `now` that lives for `ttl`
    pub fn new(id: SessionId, user_id: UserId, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id,
            user_id,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// A session is dead from its expiry instant onwards
    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether `now` still falls inside the renewal window measured from creation
    #[inline]
    pub fn is_renewable_at(&self, now: DateTime<Utc>, renewal_window: Duration) -> bool {
        now < self.created_at + renewal_window
    }

    /// Push expiry to `now + ttl` if the session is still young enough
    ///
    /// Returns `true` when the renewal branch was taken, even if the new
    /// expiry equals the old one.
    pub fn renew_if_eligible(
        &mut self,
        now: DateTime<Utc>,
        ttl: Duration,
        renewal_window: Duration,
    ) -> bool {
        if !self.is_renewable_at(now, renewal_window) {
            return false;
        }
        self.expires_at = now + ttl;
        true
    }

    /// Time left before expiry, clamped at zero
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}
