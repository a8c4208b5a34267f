//! # chirpy-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;
pub mod session;

pub use services::{
    AdminService, AuthService, ChirpService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService, WebhookOutcome, WebhookService,
};
pub use session::RefreshTokenStore;
