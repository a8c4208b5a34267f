//! Refresh token database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for refresh_tokens table
#[derive(Debug, Clone, FromRow)]
pub struct RefreshTokenModel {
    pub token_hash: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshTokenModel {
    /// Check if token is revoked
    #[inline]
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}
