//! Refresh token material
//!
//! Refresh tokens are opaque random strings. Only their SHA-256 digest is
//! persisted, so a leaked table cannot be replayed.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

/// Number of random bytes behind each refresh token
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate a new refresh token (URL-safe, unpadded base64 of 32 random bytes)
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Digest under which a refresh token is stored and looked up
pub fn hash_refresh_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
