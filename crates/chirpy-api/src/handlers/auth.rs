//! Authentication handlers
//!
//! Endpoints for login and the refresh token lifecycle.

use axum::{extract::State, Json};
use chirpy_service::dto::{LoginRequest, LoginResponse, TokenResponse};
use chirpy_service::AuthService;

use crate::extractors::{RefreshBearer, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Login with email and password
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a new access token
///
/// POST /api/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    RefreshBearer(token): RefreshBearer,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(&token).await?;
    Ok(Json(response))
}

/// Revoke a refresh token
///
/// POST /api/revoke
pub async fn revoke_token(
    State(state): State<AppState>,
    RefreshBearer(token): RefreshBearer,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.revoke(&token).await?;
    Ok(NoContent)
}
