//! Server-side session state

mod refresh_token;

pub use refresh_token::RefreshTokenStore;
