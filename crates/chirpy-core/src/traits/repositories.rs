//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Lookups return `Ok(None)` for missing rows;
//! an `Err` always means the store itself failed or a rule was violated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Chirp, RefreshToken, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by (normalised) email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user. Fails with `EmailAlreadyExists` on a duplicate email.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Replace email and password hash, returning the updated user
    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
    ) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Put the user on the premium tier. Idempotent; fails with `UserNotFound`.
    async fn set_chirpy_red(&self, id: Uuid) -> RepoResult<User>;

    /// Delete every user (and, by cascade, their chirps and tokens)
    async fn delete_all(&self) -> RepoResult<u64>;
}

// ============================================================================
// Chirp Repository
// ============================================================================

/// Ordering of chirp listings by creation time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Filter options for chirp listings
#[derive(Debug, Clone, Default)]
pub struct ChirpQuery {
    /// Only chirps by this author
    pub author_id: Option<Uuid>,
    /// Order by `created_at`
    pub sort: SortDirection,
}

#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Find chirp by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Chirp>>;

    /// List chirps, optionally filtered by author
    async fn list(&self, query: ChirpQuery) -> RepoResult<Vec<Chirp>>;

    /// Create a new chirp
    async fn create(&self, chirp: &Chirp) -> RepoResult<()>;

    /// Delete a chirp. Fails with `ChirpNotFound` if no row was removed.
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a new token record
    async fn create(&self, token: &RefreshToken) -> RepoResult<()>;

    /// Find a token record by digest
    async fn find_by_hash(&self, token_hash: &str) -> RepoResult<Option<RefreshToken>>;

    /// Mark a token revoked if it is not already.
    ///
    /// Returns `false` when the token was already revoked; fails with
    /// `RefreshTokenNotFound` when no such token exists.
    async fn revoke(&self, token_hash: &str, at: DateTime<Utc>) -> RepoResult<bool>;

    /// Atomically revoke the user's live tokens and persist `token` as the
    /// only live one, returning how many were revoked.
    ///
    /// Fails with `UserNotFound` when the owner does not exist.
    async fn replace_for_user(&self, token: &RefreshToken, at: DateTime<Utc>) -> RepoResult<u64>;
}
