//! Chirp service
//!
//! Create, list, fetch and delete chirps. Deletion is restricted to the author.

use chirpy_common::auth::authorize_ownership;
use chirpy_core::entities::Chirp;
use chirpy_core::error::DomainError;
use chirpy_core::value_objects::ChirpBody;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{ChirpResponse, CreateChirpRequest, ListChirpsQuery};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Chirp service
pub struct ChirpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChirpService<'a> {
    /// Create a new ChirpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a chirp as `author_id`
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: Uuid,
        request: CreateChirpRequest,
    ) -> ServiceResult<ChirpResponse> {
        let body = ChirpBody::parse(&request.body)?;

        let chirp = Chirp::new(Uuid::new_v4(), author_id, body);
        self.ctx.chirp_repo().create(&chirp).await?;

        info!(chirp_id = %chirp.id, "Chirp created");

        Ok(ChirpResponse::from(chirp))
    }

    /// List chirps, optionally by one author, ordered by creation time
    #[instrument(skip(self))]
    pub async fn list(&self, query: ListChirpsQuery) -> ServiceResult<Vec<ChirpResponse>> {
        let query = query.into_query()?;
        let chirps = self.ctx.chirp_repo().list(query).await?;

        Ok(chirps.into_iter().map(ChirpResponse::from).collect())
    }

    /// Get a chirp by id
    #[instrument(skip(self))]
    pub async fn get(&self, chirp_id: Uuid) -> ServiceResult<ChirpResponse> {
        let chirp = self.find(chirp_id).await?;
        Ok(ChirpResponse::from(chirp))
    }

    /// Delete a chirp on behalf of `subject`, who must be its author
    #[instrument(skip(self))]
    pub async fn delete(&self, subject: Uuid, chirp_id: Uuid) -> ServiceResult<()> {
        let chirp = self.find(chirp_id).await?;

        authorize_ownership(subject, chirp.user_id).inspect_err(|_| {
            warn!(owner = %chirp.user_id, "Delete rejected: not the author");
        })?;

        self.ctx.chirp_repo().delete(chirp_id).await?;

        info!("Chirp deleted");

        Ok(())
    }

    async fn find(&self, chirp_id: Uuid) -> ServiceResult<Chirp> {
        self.ctx
            .chirp_repo()
            .find_by_id(chirp_id)
            .await?
            .ok_or_else(|| DomainError::ChirpNotFound(chirp_id).into())
    }
}
