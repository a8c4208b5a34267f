//! Authentication service
//!
//! Handles login, access-token refresh and refresh-token revocation.

use chirpy_core::value_objects::Email;
use chrono::Duration;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, TokenResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password fail identically.
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let email = Email::parse(&request.email).map_err(|_| {
            warn!("Login failed: malformed email");
            ServiceError::invalid_credentials()
        })?;

        let user = self
            .ctx
            .user_repo()
            .find_by_email(email.as_str())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::invalid_credentials()
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::invalid_credentials()
            })?;

        let is_valid = self
            .ctx
            .password_service()
            .verify(password_hash, request.password)
            .await?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::invalid_credentials());
        }

        let ttl = self.access_token_ttl(request.expires_in_seconds);
        let token = self.ctx.jwt_service().issue(user.id, ttl)?;
        let refresh_token = self.ctx.refresh_token_store().issue(user.id).await?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            user: UserResponse::from(user),
            token,
            refresh_token,
        })
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The refresh token itself stays valid.
    #[instrument(skip_all)]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<TokenResponse> {
        let user_id = self
            .ctx
            .refresh_token_store()
            .resolve(refresh_token)
            .await
            .inspect_err(|e| warn!(error = %e, "Refresh rejected"))?;

        let token = self.ctx.jwt_service().issue_access_token(user_id)?;

        info!(user_id = %user_id, "Access token refreshed");

        Ok(TokenResponse { token })
    }

    /// Revoke a refresh token
    #[instrument(skip_all)]
    pub async fn revoke(&self, refresh_token: &str) -> ServiceResult<()> {
        self.ctx.refresh_token_store().revoke(refresh_token).await?;

        info!("Refresh token revoked");

        Ok(())
    }

    /// Requested lifetime if within `(0, max]`, otherwise the configured maximum
    fn access_token_ttl(&self, requested_secs: Option<i64>) -> Duration {
        let max = self.ctx.jwt_service().access_token_ttl();

        match requested_secs.map(Duration::seconds) {
            Some(requested) if requested > Duration::zero() && requested <= max => requested,
            _ => max,
        }
    }
}
