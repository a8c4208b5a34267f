//! Authentication extractors
//!
//! Thin wrappers over the request gate in `chirpy-common`: the header is
//! read once, the credential verified, and any failure rejected as
//! [`ApiError::Auth`] before the handler runs.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use chirpy_common::{authenticate, authenticate_service, bearer_token};
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from an access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Subject of the access token
    pub user_id: Uuid,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let user_id = authenticate(&parts.headers, app_state.jwt_service())?;

        Ok(AuthUser::new(user_id))
    }
}

/// Raw refresh token presented with the bearer scheme
///
/// Only the header shape is checked here; the store decides whether the
/// token is live.
#[derive(Clone)]
pub struct RefreshBearer(pub String);

impl std::fmt::Debug for RefreshBearer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RefreshBearer(<redacted>)")
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RefreshBearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        Ok(RefreshBearer(token.to_owned()))
    }
}

/// A machine caller that presented the configured service API key
#[derive(Debug, Clone, Copy)]
pub struct ServiceCaller;

#[async_trait]
impl<S> FromRequestParts<S> for ServiceCaller
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        authenticate_service(&parts.headers, app_state.polka_key())?;

        Ok(ServiceCaller)
    }
}
