//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use chirpy_core::entities::User;
use chirpy_core::error::DomainError;
use chirpy_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, is_chirpy_red, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, is_chirpy_red, created_at, updated_at
            FROM users
            WHERE lower(email) = lower($1)
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, password_hash), fields(user_id = %user.id))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, hashed_password, is_chirpy_red, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.is_chirpy_red)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
    ) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET email = $2, hashed_password = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, is_chirpy_red, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        result.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT hashed_password FROM users WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn set_chirpy_red(&self, id: Uuid) -> RepoResult<User> {
        // Repeated upgrades leave updated_at untouched
        let result = sqlx::query_as::<_, UserModel>(
            r"
            UPDATE users
            SET is_chirpy_red = TRUE,
                updated_at = CASE WHEN is_chirpy_red THEN updated_at ELSE NOW() END
            WHERE id = $1
            RETURNING id, email, is_chirpy_red, created_at, updated_at
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::from).ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
