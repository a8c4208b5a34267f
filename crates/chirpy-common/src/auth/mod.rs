//! Authentication utilities
//!
//! Leaves first: password hashing, access-token codec and refresh-token
//! material, then header extraction and the gate that composes them.

mod error;
mod extract;
mod gate;
mod jwt;
mod password;
mod refresh;

pub use error::AuthError;
pub use extract::{api_key, bearer_token, API_KEY_SCHEME, BEARER_SCHEME};
pub use gate::{authenticate, authenticate_service, authorize_ownership};
pub use jwt::{Claims, JwtService, ISSUER};
pub use password::{hash_password, verify_password, PasswordService};
pub use refresh::{generate_refresh_token, hash_refresh_token, REFRESH_TOKEN_BYTES};
