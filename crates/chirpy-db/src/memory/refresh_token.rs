//! In-memory implementation of RefreshTokenRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use chirpy_core::entities::RefreshToken;
use chirpy_core::error::DomainError;
use chirpy_core::traits::{RefreshTokenRepository, RepoResult};

use super::store::MemoryStore;

/// In-memory implementation of RefreshTokenRepository
#[derive(Debug, Clone)]
pub struct MemoryRefreshTokenRepository {
    store: Arc<MemoryStore>,
}

impl MemoryRefreshTokenRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RefreshTokenRepository for MemoryRefreshTokenRepository {
    async fn create(&self, token: &RefreshToken) -> RepoResult<()> {
        let mut tables = self.store.tables.write();

        if !tables.users.contains_key(&token.user_id) {
            return Err(DomainError::UserNotFound(token.user_id));
        }

        tables
            .refresh_tokens
            .insert(token.token_hash.clone(), token.clone());
        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> RepoResult<Option<RefreshToken>> {
        Ok(self
            .store
            .tables
            .read()
            .refresh_tokens
            .get(token_hash)
            .cloned())
    }

    async fn revoke(&self, token_hash: &str, at: DateTime<Utc>) -> RepoResult<bool> {
        let mut tables = self.store.tables.write();

        let token = tables
            .refresh_tokens
            .get_mut(token_hash)
            .ok_or(DomainError::RefreshTokenNotFound)?;

        if token.is_revoked() {
            return Ok(false);
        }
        token.revoked_at = Some(at);
        token.updated_at = at;
        Ok(true)
    }

    async fn replace_for_user(&self, token: &RefreshToken, at: DateTime<Utc>) -> RepoResult<u64> {
        let mut tables = self.store.tables.write();

        if !tables.users.contains_key(&token.user_id) {
            return Err(DomainError::UserNotFound(token.user_id));
        }

        let mut count = 0;
        for live in tables
            .refresh_tokens
            .values_mut()
            .filter(|t| t.user_id == token.user_id && !t.is_revoked())
        {
            live.revoked_at = Some(at);
            live.updated_at = at;
            count += 1;
        }

        tables
            .refresh_tokens
            .insert(token.token_hash.clone(), token.clone());
        Ok(count)
    }
}
