//! In-memory implementation of ChirpRepository

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use chirpy_core::entities::Chirp;
use chirpy_core::error::DomainError;
use chirpy_core::traits::{ChirpQuery, ChirpRepository, RepoResult, SortDirection};

use super::store::MemoryStore;

/// In-memory implementation of ChirpRepository
#[derive(Debug, Clone)]
pub struct MemoryChirpRepository {
    store: Arc<MemoryStore>,
}

impl MemoryChirpRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChirpRepository for MemoryChirpRepository {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Chirp>> {
        Ok(self
            .store
            .tables
            .read()
            .chirps
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list(&self, query: ChirpQuery) -> RepoResult<Vec<Chirp>> {
        let mut chirps: Vec<Chirp> = self
            .store
            .tables
            .read()
            .chirps
            .iter()
            .filter(|c| query.author_id.map_or(true, |author| c.user_id == author))
            .cloned()
            .collect();

        chirps.sort_by_key(|c| c.created_at);
        if query.sort == SortDirection::Desc {
            chirps.reverse();
        }

        Ok(chirps)
    }

    async fn create(&self, chirp: &Chirp) -> RepoResult<()> {
        let mut tables = self.store.tables.write();

        if !tables.users.contains_key(&chirp.user_id) {
            return Err(DomainError::UserNotFound(chirp.user_id));
        }

        tables.chirps.push(chirp.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tables = self.store.tables.write();

        let before = tables.chirps.len();
        tables.chirps.retain(|c| c.id != id);

        if tables.chirps.len() == before {
            return Err(DomainError::ChirpNotFound(id));
        }
        Ok(())
    }
}
