//! In-memory implementation of UserRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use chirpy_core::entities::User;
use chirpy_core::error::DomainError;
use chirpy_core::traits::{RepoResult, UserRepository};

use super::store::{MemoryStore, StoredUser};

/// In-memory implementation of UserRepository
#[derive(Debug, Clone)]
pub struct MemoryUserRepository {
    store: Arc<MemoryStore>,
}

impl MemoryUserRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self
            .store
            .tables
            .read()
            .users
            .get(&id)
            .map(|stored| stored.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .store
            .tables
            .read()
            .users
            .values()
            .find(|stored| stored.user.email.eq_ignore_ascii_case(email))
            .map(|stored| stored.user.clone()))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut tables = self.store.tables.write();

        if tables.email_taken(&user.email, None) {
            return Err(DomainError::EmailAlreadyExists);
        }
        if tables.users.contains_key(&user.id) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate user id {}",
                user.id
            )));
        }

        tables.users.insert(
            user.id,
            StoredUser {
                user: user.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(())
    }

    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        password_hash: &str,
    ) -> RepoResult<User> {
        let mut tables = self.store.tables.write();

        if tables.email_taken(email, Some(id)) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let stored = tables
            .users
            .get_mut(&id)
            .ok_or(DomainError::UserNotFound(id))?;
        stored.user.email = email.to_string();
        stored.user.updated_at = Utc::now();
        stored.password_hash = password_hash.to_string();

        Ok(stored.user.clone())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        Ok(self
            .store
            .tables
            .read()
            .users
            .get(&id)
            .map(|stored| stored.password_hash.clone()))
    }

    async fn set_chirpy_red(&self, id: Uuid) -> RepoResult<User> {
        let mut tables = self.store.tables.write();

        let stored = tables
            .users
            .get_mut(&id)
            .ok_or(DomainError::UserNotFound(id))?;
        if !stored.user.is_chirpy_red {
            stored.user.is_chirpy_red = true;
            stored.user.updated_at = Utc::now();
        }

        Ok(stored.user.clone())
    }

    async fn delete_all(&self) -> RepoResult<u64> {
        let mut tables = self.store.tables.write();

        let count = tables.users.len() as u64;
        tables.users.clear();
        tables.chirps.clear();
        tables.refresh_tokens.clear();

        Ok(count)
    }
}
