//! PostgreSQL implementation of RefreshTokenRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use chirpy_core::entities::RefreshToken;
use chirpy_core::error::DomainError;
use chirpy_core::traits::{RefreshTokenRepository, RepoResult};

use crate::models::RefreshTokenModel;

use super::error::{map_db_error, map_foreign_key_violation, user_not_found};

/// PostgreSQL implementation of RefreshTokenRepository
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new PgRefreshTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    #[instrument(skip(self, token), fields(user_id = %token.user_id))]
    async fn create(&self, token: &RefreshToken) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO refresh_tokens (token_hash, user_id, created_at, updated_at, expires_at, revoked_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&token.token_hash)
        .bind(token.user_id)
        .bind(token.created_at)
        .bind(token.updated_at)
        .bind(token.expires_at)
        .bind(token.revoked_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, token.user_id))?;

        Ok(())
    }

    #[instrument(skip_all)]
    async fn find_by_hash(&self, token_hash: &str) -> RepoResult<Option<RefreshToken>> {
        let result = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT token_hash, user_id, created_at, updated_at, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token_hash = $1
            ",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RefreshToken::from))
    }

    #[instrument(skip(self, token_hash))]
    async fn revoke(&self, token_hash: &str, at: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE refresh_tokens
            SET revoked_at = $2, updated_at = $2
            WHERE token_hash = $1 AND revoked_at IS NULL
            ",
        )
        .bind(token_hash)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM refresh_tokens WHERE token_hash = $1)
            ",
        )
        .bind(token_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if exists {
            Ok(false)
        } else {
            Err(DomainError::RefreshTokenNotFound)
        }
    }

    #[instrument(skip(self, token), fields(user_id = %token.user_id))]
    async fn replace_for_user(&self, token: &RefreshToken, at: DateTime<Utc>) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Serializes concurrent logins of the same user
        let owner = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(token.user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;
        if owner.is_none() {
            return Err(user_not_found(token.user_id));
        }

        let revoked = sqlx::query(
            r"
            UPDATE refresh_tokens
            SET revoked_at = $2, updated_at = $2
            WHERE user_id = $1 AND revoked_at IS NULL
            ",
        )
        .bind(token.user_id)
        .bind(at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        sqlx::query(
            r"
            INSERT INTO refresh_tokens (token_hash, user_id, created_at, updated_at, expires_at, revoked_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&token.token_hash)
        .bind(token.user_id)
        .bind(token.created_at)
        .bind(token.updated_at)
        .bind(token.expires_at)
        .bind(token.revoked_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_foreign_key_violation(e, token.user_id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(revoked)
    }
}
