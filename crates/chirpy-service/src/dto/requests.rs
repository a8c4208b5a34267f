//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where the payload carries
//! user input, `Validate`.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use chirpy_core::traits::{ChirpQuery, SortDirection};

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// User Requests
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Shape and normalisation are checked by `Email::parse`
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Replace the caller's email and password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// Requested access token lifetime; clamped to the configured maximum
    #[serde(default)]
    pub expires_in_seconds: Option<i64>,
}

// ============================================================================
// Chirp Requests
// ============================================================================

/// Create chirp request. Length and profanity rules live in `ChirpBody`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// Query string of the chirp listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListChirpsQuery {
    pub author_id: Option<String>,
    pub sort: Option<String>,
}

impl ListChirpsQuery {
    /// Parse into a repository query
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` for a malformed author id or an
    /// unknown sort order
    pub fn into_query(self) -> ServiceResult<ChirpQuery> {
        let author_id = match self.author_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<Uuid>()
                    .map_err(|_| ServiceError::validation("Invalid author ID"))?,
            ),
        };

        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => SortDirection::default(),
            Some(s) if s.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(s) if s.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(_) => {
                return Err(ServiceError::validation(
                    "Invalid sort order, expected asc or desc",
                ))
            }
        };

        Ok(ChirpQuery { author_id, sort })
    }
}

// ============================================================================
// Webhook Requests
// ============================================================================

/// Event name that upgrades a user to Chirpy Red
pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// Billing provider webhook payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PolkaWebhookRequest {
    pub event: String,
    pub data: PolkaWebhookData,
}

/// Webhook event data
#[derive(Debug, Clone, Deserialize)]
pub struct PolkaWebhookData {
    pub user_id: Uuid,
}
