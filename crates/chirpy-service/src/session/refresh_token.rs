//! Refresh token storage.
//!
//! Issues opaque refresh tokens, persists only their digest and resolves
//! presented tokens back to a user. A user holds at most one live refresh
//! token: issuing a new one revokes the older ones. Exchanging a refresh
//! token for an access token leaves it in place.

use std::sync::Arc;

use chirpy_common::auth::{generate_refresh_token, hash_refresh_token, AuthError};
use chirpy_core::entities::RefreshToken;
use chirpy_core::error::DomainError;
use chirpy_core::traits::RefreshTokenRepository;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::services::{ServiceError, ServiceResult};

/// Refresh token store backed by a repository
#[derive(Clone)]
pub struct RefreshTokenStore {
    repo: Arc<dyn RefreshTokenRepository>,
    ttl: Duration,
}

impl RefreshTokenStore {
    /// Create a new refresh token store
    #[must_use]
    pub fn new(repo: Arc<dyn RefreshTokenRepository>, ttl: Duration) -> Self {
        Self { repo, ttl }
    }

    /// Lifetime of newly issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a new refresh token for `user_id`, returning the plaintext
    pub async fn issue(&self, user_id: Uuid) -> ServiceResult<String> {
        self.issue_at(user_id, Utc::now()).await
    }

    /// Issue a new refresh token as if the current time were `now`
    #[instrument(skip(self))]
    pub async fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> ServiceResult<String> {
        let token = generate_refresh_token();

        let record = RefreshToken::new(hash_refresh_token(&token), user_id, now, self.ttl);
        let revoked = self.repo.replace_for_user(&record, now).await?;
        if revoked > 0 {
            debug!(revoked, "Revoked older refresh tokens");
        }

        Ok(token)
    }

    /// Resolve a presented token to its user
    pub async fn resolve(&self, token: &str) -> ServiceResult<Uuid> {
        self.resolve_at(token, Utc::now()).await
    }

    /// Resolve a presented token as if the current time were `now`
    ///
    /// Revocation is checked before expiry.
    #[instrument(skip_all)]
    pub async fn resolve_at(&self, token: &str, now: DateTime<Utc>) -> ServiceResult<Uuid> {
        let record = self
            .repo
            .find_by_hash(&hash_refresh_token(token))
            .await?
            .ok_or(AuthError::TokenNotFound)?;

        if record.is_revoked() {
            return Err(AuthError::TokenRevoked.into());
        }
        if record.is_expired_at(now) {
            return Err(AuthError::TokenExpired.into());
        }

        Ok(record.user_id)
    }

    /// Revoke a token. Revoking an already revoked token succeeds.
    #[instrument(skip_all)]
    pub async fn revoke(&self, token: &str) -> ServiceResult<()> {
        match self
            .repo
            .revoke(&hash_refresh_token(token), Utc::now())
            .await
        {
            Ok(true) => Ok(()),
            Ok(false) => {
                debug!("Refresh token was already revoked");
                Ok(())
            }
            Err(DomainError::RefreshTokenNotFound) => Err(AuthError::TokenNotFound.into()),
            Err(e) => Err(ServiceError::from(e)),
        }
    }
}

impl std::fmt::Debug for RefreshTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenStore")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
