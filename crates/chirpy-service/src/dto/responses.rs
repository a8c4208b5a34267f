//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Public view of a user account
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub is_chirpy_red: bool,
}

/// Successful login: the user plus both tokens
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

/// A freshly issued access token
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// A chirp
#[derive(Debug, Clone, Serialize)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}
