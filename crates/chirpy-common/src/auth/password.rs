//! Password hashing and verification utilities
//!
//! Uses Argon2id for secure password hashing (OWASP recommended).
//! The salt is generated per call and embedded in the PHC string, so the
//! stored value is all that is needed to verify a candidate later.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Argon2,
};

use super::error::AuthError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns `AuthError::Hashing` if the RNG or the algorithm fails
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Verify a candidate password against a stored hash
///
/// Returns `Ok(false)` on mismatch.
///
/// # Errors
/// Returns `AuthError::Hashing` if the stored hash cannot be parsed or the
/// algorithm fails for a reason other than a mismatch
pub fn verify_password(hash: &str, password: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(AuthError::Hashing(e.to_string())),
    }
}

/// Password service for dependency injection
///
/// Argon2 is deliberately slow, so the async methods move the work onto the
/// blocking thread pool instead of stalling the request executor.
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password on the blocking pool
    ///
    /// # Errors
    /// Returns `AuthError::Hashing` if hashing fails or the worker panics
    pub async fn hash(&self, password: String) -> Result<String, AuthError> {
        tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
    }

    /// Verify a password against a hash on the blocking pool
    ///
    /// # Errors
    /// Returns `AuthError::Hashing` if verification fails for an internal reason
    pub async fn verify(&self, hash: String, password: String) -> Result<bool, AuthError> {
        tokio::task::spawn_blocking(move || verify_password(&hash, &password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
    }
}
