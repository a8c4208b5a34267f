//! Service context - dependency container for services
//!
//! Holds all repositories, auth services and shared counters needed by services.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chirpy_common::auth::{JwtService, PasswordService};
use chirpy_common::Environment;
use chirpy_core::traits::{ChirpRepository, RefreshTokenRepository, UserRepository};
use chirpy_db::memory::{
    MemoryChirpRepository, MemoryRefreshTokenRepository, MemoryStore, MemoryUserRepository,
};
use chirpy_db::{PgChirpRepository, PgPool, PgRefreshTokenRepository, PgUserRepository};

use crate::session::RefreshTokenStore;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; clones share the repositories and the hit counter.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    chirp_repo: Arc<dyn ChirpRepository>,

    // Sessions
    refresh_token_store: RefreshTokenStore,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,

    // Settings
    polka_key: Arc<str>,
    environment: Environment,

    // File server hits since start-up or the last reset
    file_server_hits: Arc<AtomicU64>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        chirp_repo: Arc<dyn ChirpRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        jwt_service: Arc<JwtService>,
        polka_key: impl Into<Arc<str>>,
        environment: Environment,
    ) -> Self {
        let refresh_token_store =
            RefreshTokenStore::new(refresh_token_repo, jwt_service.refresh_token_ttl());

        Self {
            user_repo,
            chirp_repo,
            refresh_token_store,
            jwt_service,
            password_service: PasswordService::new(),
            polka_key: polka_key.into(),
            environment,
            file_server_hits: Arc::new(AtomicU64::new(0)),
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the chirp repository
    pub fn chirp_repo(&self) -> &dyn ChirpRepository {
        self.chirp_repo.as_ref()
    }

    // === Sessions ===

    /// Get the refresh token store
    pub fn refresh_token_store(&self) -> &RefreshTokenStore {
        &self.refresh_token_store
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    // === Settings ===

    /// API key expected from the billing webhook
    pub fn polka_key(&self) -> &str {
        &self.polka_key
    }

    /// Deployment platform
    pub fn environment(&self) -> Environment {
        self.environment
    }

    // === Metrics ===

    /// Count one file server hit
    pub fn record_hit(&self) {
        self.file_server_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Current file server hit count
    pub fn hits(&self) -> u64 {
        self.file_server_hits.load(Ordering::Relaxed)
    }

    /// Reset the file server hit count to zero
    pub fn reset_hits(&self) {
        self.file_server_hits.store(0, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("environment", &self.environment)
            .field("file_server_hits", &self.hits())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    chirp_repo: Option<Arc<dyn ChirpRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    polka_key: Option<String>,
    environment: Environment,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the PostgreSQL repositories over `pool`
    pub fn postgres(self, pool: PgPool) -> Self {
        self.user_repo(Arc::new(PgUserRepository::new(pool.clone())))
            .chirp_repo(Arc::new(PgChirpRepository::new(pool.clone())))
            .refresh_token_repo(Arc::new(PgRefreshTokenRepository::new(pool)))
    }

    /// Use the in-memory repositories over a shared store
    pub fn in_memory(self, store: Arc<MemoryStore>) -> Self {
        self.user_repo(Arc::new(MemoryUserRepository::new(store.clone())))
            .chirp_repo(Arc::new(MemoryChirpRepository::new(store.clone())))
            .refresh_token_repo(Arc::new(MemoryRefreshTokenRepository::new(store)))
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn chirp_repo(mut self, repo: Arc<dyn ChirpRepository>) -> Self {
        self.chirp_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn polka_key(mut self, key: impl Into<String>) -> Self {
        self.polka_key = Some(key.into());
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.chirp_repo
                .ok_or_else(|| ServiceError::validation("chirp_repo is required"))?,
            self.refresh_token_repo
                .ok_or_else(|| ServiceError::validation("refresh_token_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.polka_key
                .ok_or_else(|| ServiceError::validation("polka_key is required"))?,
            self.environment,
        ))
    }
}
