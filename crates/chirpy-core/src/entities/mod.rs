//! Domain entities - core business objects

mod chirp;
mod refresh_token;
mod user;

pub use chirp::Chirp;
pub use refresh_token::RefreshToken;
pub use user::User;
