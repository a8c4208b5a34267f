//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Chirp not found: {0}")]
    ChirpNotFound(Uuid),

    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Chirp is too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChirpNotFound(_) => "UNKNOWN_CHIRP",
            Self::RefreshTokenNotFound => "UNKNOWN_REFRESH_TOKEN",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::ChirpNotFound(_) | Self::RefreshTokenNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEmail | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }

    /// Check if this error hides an infrastructure failure
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}
