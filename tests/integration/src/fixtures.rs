//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration and login credentials
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            email: format!("user{}@example.com", unique_suffix()),
            password: "04234".to_string(),
        }
    }
}

/// Login request with an optional lifetime
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_seconds: Option<i64>,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
            expires_in_seconds: None,
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub is_chirpy_red: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub id: String,
    pub email: String,
    pub is_chirpy_red: bool,
    pub token: String,
    pub refresh_token: String,
}

/// Refresh response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Create chirp request
#[derive(Debug, Serialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

impl CreateChirpRequest {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// Chirp response
#[derive(Debug, Deserialize)]
pub struct ChirpResponse {
    pub id: String,
    pub body: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Billing webhook payload
#[derive(Debug, Serialize)]
pub struct WebhookRequest {
    pub event: String,
    pub data: WebhookData,
}

/// Billing webhook data
#[derive(Debug, Serialize)]
pub struct WebhookData {
    pub user_id: String,
}

impl WebhookRequest {
    pub fn new(event: &str, user_id: &str) -> Self {
        Self {
            event: event.to_string(),
            data: WebhookData {
                user_id: user_id.to_string(),
            },
        }
    }
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub status: u16,
}
