//! User service
//!
//! Registration and credential updates.

use chirpy_core::entities::User;
use chirpy_core::value_objects::Email;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let email = Email::parse(&request.email)?;

        let password_hash = self
            .ctx
            .password_service()
            .hash(request.password)
            .await?;

        let user = User::new(Uuid::new_v4(), email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        Ok(UserResponse::from(user))
    }

    /// Replace the caller's email and password
    ///
    /// The subject always edits its own record, so ownership is implied by
    /// the access token.
    #[instrument(skip(self, request))]
    pub async fn update_credentials(
        &self,
        subject: Uuid,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let email = Email::parse(&request.email)?;

        if self.ctx.user_repo().find_by_id(subject).await?.is_none() {
            return Err(ServiceError::not_found("User", subject.to_string()));
        }

        let password_hash = self
            .ctx
            .password_service()
            .hash(request.password)
            .await?;

        let user = self
            .ctx
            .user_repo()
            .update_credentials(subject, email.as_str(), &password_hash)
            .await?;

        info!(user_id = %user.id, "User credentials updated");

        Ok(UserResponse::from(user))
    }

    /// Get a user by id
    pub async fn get(&self, id: Uuid) -> ServiceResult<UserResponse> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{context, register};
    use chirpy_common::{verify_password, Environment};

    #[tokio::test]
    async fn test_register_normalises_email() {
        let ctx = context(Environment::Development);
        let user = register(&ctx, "  Saul@BetterCall.com ", "04234").await;

        assert_eq!(user.email, "saul@bettercall.com");
        assert!(!user.is_chirpy_red);
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let ctx = context(Environment::Development);
        let user = register(&ctx, "a@x.com", "p1").await;

        let hash = ctx.user_repo().get_password_hash(user.id).await.unwrap().unwrap();
        assert_ne!(hash, "p1");
        assert!(verify_password(&hash, "p1").unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_any_case() {
        let ctx = context(Environment::Development);
        register(&ctx, "a@x.com", "p1").await;

        let err = UserService::new(&ctx)
            .register(CreateUserRequest {
                email: "A@X.COM".to_string(),
                password: "p2".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_email() {
        let ctx = context(Environment::Development);
        let err = UserService::new(&ctx)
            .register(CreateUserRequest {
                email: "nope".to_string(),
                password: "p1".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_update_credentials() {
        let ctx = context(Environment::Development);
        let user = register(&ctx, "a@x.com", "p1").await;

        let updated = UserService::new(&ctx)
            .update_credentials(
                user.id,
                UpdateUserRequest {
                    email: "b@x.com".to_string(),
                    password: "p2".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.email, "b@x.com");
        let hash = ctx.user_repo().get_password_hash(user.id).await.unwrap().unwrap();
        assert!(verify_password(&hash, "p2").unwrap());
    }

    #[tokio::test]
    async fn test_update_unknown_subject() {
        let ctx = context(Environment::Development);
        let err = UserService::new(&ctx)
            .update_credentials(
                Uuid::new_v4(),
                UpdateUserRequest {
                    email: "b@x.com".to_string(),
                    password: "p2".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
