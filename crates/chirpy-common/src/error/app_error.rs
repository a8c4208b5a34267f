//! Application error types
//!
//! Unified error handling for the entire application.

use chirpy_core::DomainError;

use crate::auth::AuthError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::InvalidCredentials => 401,

            // 401 / 403 / 500 depending on the auth failure
            Self::Auth(e) => e.status_code(),

            // 403 Forbidden
            Self::Forbidden(_) => 403,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Auth(e) => e.public_code(),
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => "INTERNAL_ERROR",
            Self::Domain(e) if e.is_internal() => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Message safe to show to clients
    ///
    /// Server-side causes and the precise auth failure stay in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Auth(e) => e.public_message().to_string(),
            _ if self.is_server_error() => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidCredentials.status_code(), 401);
        assert_eq!(AppError::Auth(AuthError::ExpiredToken).status_code(), 401);
        assert_eq!(AppError::Auth(AuthError::Forbidden).status_code(), 403);
        assert_eq!(AppError::Forbidden("dev only".to_string()).status_code(), 403);
        assert_eq!(AppError::NotFound("user".to_string()).status_code(), 404);
        assert_eq!(AppError::Validation("test".to_string()).status_code(), 400);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_status_codes() {
        assert_eq!(
            AppError::Domain(DomainError::ChirpNotFound(Uuid::nil())).status_code(),
            404
        );
        assert_eq!(
            AppError::Domain(DomainError::ContentTooLong { max: 140 }).status_code(),
            400
        );
        assert_eq!(
            AppError::Domain(DomainError::EmailAlreadyExists).status_code(),
            409
        );
        assert_eq!(
            AppError::Domain(DomainError::DatabaseError("boom".into())).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidCredentials.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(AppError::NotFound("user".to_string()).error_code(), "NOT_FOUND");
        assert_eq!(AppError::Auth(AuthError::BadSignature).error_code(), "UNAUTHORIZED");
        assert_eq!(AppError::Auth(AuthError::MissingAuth).error_code(), "MISSING_AUTH");
        assert_eq!(
            AppError::Domain(DomainError::DatabaseError("x".into())).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_public_message_hides_internals() {
        let err = AppError::Database("connection refused on 10.0.0.3".to_string());
        assert_eq!(err.public_message(), "Internal server error");

        let err = AppError::Auth(AuthError::Hashing("rng failure".to_string()));
        assert_eq!(err.public_message(), "Internal server error");

        let err = AppError::Auth(AuthError::TokenRevoked);
        assert_eq!(err.public_message(), "Invalid or expired credentials");
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::InvalidCredentials.is_client_error());
        assert!(AppError::NotFound("test".to_string()).is_client_error());
        assert!(!AppError::Database("test".to_string()).is_client_error());
    }

    #[test]
    fn test_internal_is_server_error() {
        let err = AppError::internal(std::io::Error::other("address in use"));
        assert!(err.is_server_error());
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert_eq!(err.public_message(), "Internal server error");
    }
}
