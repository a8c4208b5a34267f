//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
struct ChirpIdParams {
    chirp_id: String,
}

/// `:chirp_id` parsed as a UUID
#[derive(Debug, Clone, Copy)]
pub struct ChirpIdPath(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ChirpIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<ChirpIdParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        params
            .chirp_id
            .parse()
            .map(ChirpIdPath)
            .map_err(|_| ApiError::invalid_path("Invalid chirp_id format"))
    }
}
