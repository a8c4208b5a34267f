//! JWT utilities for authentication
//!
//! Access tokens are HS256 JWTs carrying the user id, issue time and expiry.
//! Validation needs only the server secret, never a store lookup.
//!
//! Expiry is checked here rather than by `jsonwebtoken`, against a single
//! `now` supplied by the caller, with no leeway: a token whose `exp` equals
//! the current second is already expired.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::AuthError;

/// Issuer written into and required from every access token
pub const ISSUER: &str = "chirpy";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID from the subject
    ///
    /// # Errors
    /// Returns `AuthError::MalformedToken` if the subject is not a UUID
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        self.sub
            .parse::<Uuid>()
            .map_err(|_| AuthError::MalformedToken)
    }

    /// Check if the token is expired at `now`
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// JWT service for issuing and validating access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl JwtService {
    /// Create a new JWT service with the given secret and lifetimes in seconds
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64, refresh_token_expiry: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_token_ttl: Duration::seconds(access_token_expiry),
            refresh_token_ttl: Duration::seconds(refresh_token_expiry),
        }
    }

    /// Default access token lifetime
    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    /// Refresh token lifetime (refresh tokens themselves are opaque, see `RefreshTokenStore`)
    pub fn refresh_token_ttl(&self) -> Duration {
        self.refresh_token_ttl
    }

    /// Issue an access token with the default lifetime
    ///
    /// # Errors
    /// Returns `AuthError::Signing` if token encoding fails
    pub fn issue_access_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        self.issue(user_id, self.access_token_ttl)
    }

    /// Issue an access token valid for `ttl` from now
    ///
    /// # Errors
    /// Returns `AuthError::Signing` if token encoding fails
    pub fn issue(&self, user_id: Uuid, ttl: Duration) -> Result<String, AuthError> {
        self.issue_at(user_id, ttl, Utc::now())
    }

    /// Issue an access token as if the current time were `now`
    ///
    /// # Errors
    /// Returns `AuthError::Signing` if token encoding fails
    pub fn issue_at(
        &self,
        user_id: Uuid,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Validate an access token and return its subject
    ///
    /// # Errors
    /// Returns `MalformedToken`, `BadSignature` or `ExpiredToken`
    pub fn validate(&self, token: &str) -> Result<Uuid, AuthError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate an access token as if the current time were `now`
    ///
    /// # Errors
    /// Returns `MalformedToken`, `BadSignature` or `ExpiredToken`
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, AuthError> {
        let claims = self.decode_claims(token)?;

        if claims.is_expired_at(now) {
            return Err(AuthError::ExpiredToken);
        }

        claims.user_id()
    }

    /// Verify signature and structure, returning the claims without checking expiry
    ///
    /// # Errors
    /// Returns `MalformedToken` or `BadSignature`
    pub fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::BadSignature,
                _ => AuthError::MalformedToken,
            })
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .finish_non_exhaustive()
    }
}
