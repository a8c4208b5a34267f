//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateChirpRequest, CreateUserRequest, ListChirpsQuery, LoginRequest, PolkaWebhookData,
    PolkaWebhookRequest, UpdateUserRequest, USER_UPGRADED_EVENT,
};
pub use responses::{ChirpResponse, LoginResponse, TokenResponse, UserResponse};
