//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in chirpy-core.
//! Each repository handles database operations for a specific domain entity.

mod chirp;
mod error;
mod refresh_token;
mod user;

pub use chirp::PgChirpRepository;
pub use refresh_token::PgRefreshTokenRepository;
pub use user::PgUserRepository;
