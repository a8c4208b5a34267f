//! In-memory repository implementations
//!
//! All three repositories share one [`MemoryStore`] so that relational rules
//! hold as they do in PostgreSQL: chirps and tokens need an existing user,
//! and deleting users cascades.

mod chirp;
mod refresh_token;
mod store;
mod user;

pub use chirp::MemoryChirpRepository;
pub use refresh_token::MemoryRefreshTokenRepository;
pub use store::MemoryStore;
pub use user::MemoryUserRepository;
