//! Chirp handlers
//!
//! Endpoints for chirp operations.

use axum::{extract::State, Json};
use chirpy_service::dto::{ChirpResponse, CreateChirpRequest, ListChirpsQuery};
use chirpy_service::ChirpService;

use crate::extractors::{ApiQuery, AuthUser, ChirpIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create chirp
///
/// POST /api/chirps
pub async fn create_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateChirpRequest>,
) -> ApiResult<Created<Json<ChirpResponse>>> {
    let service = ChirpService::new(state.service_context());
    let chirp = service.create(auth.user_id, request).await?;
    Ok(Created(Json(chirp)))
}

/// List chirps, optionally by one author
///
/// GET /api/chirps?author_id=&sort=asc|desc
pub async fn list_chirps(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListChirpsQuery>,
) -> ApiResult<Json<Vec<ChirpResponse>>> {
    let service = ChirpService::new(state.service_context());
    let chirps = service.list(query).await?;
    Ok(Json(chirps))
}

/// Get chirp by ID
///
/// GET /api/chirps/{chirp_id}
pub async fn get_chirp(
    State(state): State<AppState>,
    ChirpIdPath(chirp_id): ChirpIdPath,
) -> ApiResult<Json<ChirpResponse>> {
    let service = ChirpService::new(state.service_context());
    let chirp = service.get(chirp_id).await?;
    Ok(Json(chirp))
}

/// Delete own chirp
///
/// DELETE /api/chirps/{chirp_id}
pub async fn delete_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    ChirpIdPath(chirp_id): ChirpIdPath,
) -> ApiResult<NoContent> {
    let service = ChirpService::new(state.service_context());
    service.delete(auth.user_id, chirp_id).await?;
    Ok(NoContent)
}
