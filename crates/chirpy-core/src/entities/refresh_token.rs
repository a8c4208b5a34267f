//! Refresh token entity - server-side record of an opaque session credential

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Persisted refresh token. Only the digest of the opaque token is kept,
/// so the plaintext cannot be recovered from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub token_hash: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Create a live token record expiring `ttl` after `now`
    pub fn new(token_hash: String, user_id: Uuid, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token_hash,
            user_id,
            created_at: now,
            updated_at: now,
            expires_at: now + ttl,
            revoked_at: None,
        }
    }

    /// Check if token is revoked
    #[inline]
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Check if token is expired at `now`. The expiry instant itself counts as expired.
    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Check if token is usable at `now`
    #[inline]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_revoked() && !self.is_expired_at(now)
    }
}
