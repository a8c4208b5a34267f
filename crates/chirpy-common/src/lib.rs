//! # chirpy-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    api_key, authenticate, authenticate_service, authorize_ownership, bearer_token,
    generate_refresh_token, hash_password, hash_refresh_token, verify_password, AuthError,
    Claims, JwtService, PasswordService,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    FileServerConfig, JwtConfig, PolkaConfig, ServerConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
