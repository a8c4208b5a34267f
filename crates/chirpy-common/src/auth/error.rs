//! Authentication and authorization failures

/// Why a credential was rejected.
///
/// Every variant except `Forbidden` and the internal ones collapses to
/// `401 Unauthorized` at the HTTP boundary; the detail is for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Missing authentication")]
    MissingAuth,

    // Access tokens
    #[error("Malformed token")]
    MalformedToken,

    #[error("Token signature does not verify")]
    BadSignature,

    #[error("Access token expired")]
    ExpiredToken,

    // Refresh tokens
    #[error("Refresh token not found")]
    TokenNotFound,

    #[error("Refresh token expired")]
    TokenExpired,

    #[error("Refresh token revoked")]
    TokenRevoked,

    // Service credentials
    #[error("API key does not match")]
    InvalidApiKey,

    #[error("Forbidden")]
    Forbidden,

    // Internal
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl AuthError {
    /// Check if this error means "not authenticated"
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, Self::Forbidden | Self::Hashing(_) | Self::Signing(_))
    }

    /// Check if this error hides an internal failure
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Hashing(_) | Self::Signing(_))
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Forbidden => 403,
            Self::Hashing(_) | Self::Signing(_) => 500,
            _ => 401,
        }
    }

    /// Error code shown to clients
    #[must_use]
    pub fn public_code(&self) -> &'static str {
        match self {
            Self::MissingAuth => "MISSING_AUTH",
            Self::Forbidden => "FORBIDDEN",
            Self::Hashing(_) | Self::Signing(_) => "INTERNAL_ERROR",
            _ => "UNAUTHORIZED",
        }
    }

    /// Message shown to clients. Never carries the precise cause.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MissingAuth => "Missing authentication",
            Self::Forbidden => "You do not own this resource",
            Self::Hashing(_) | Self::Signing(_) => "Internal server error",
            _ => "Invalid or expired credentials",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_family_collapses() {
        for err in [
            AuthError::MissingAuth,
            AuthError::MalformedToken,
            AuthError::BadSignature,
            AuthError::ExpiredToken,
            AuthError::TokenNotFound,
            AuthError::TokenExpired,
            AuthError::TokenRevoked,
            AuthError::InvalidApiKey,
        ] {
            assert!(err.is_unauthorized(), "{err:?}");
            assert_eq!(err.status_code(), 401);
        }
    }

    #[test]
    fn test_forbidden_is_distinct() {
        assert!(!AuthError::Forbidden.is_unauthorized());
        assert_eq!(AuthError::Forbidden.status_code(), 403);
        assert_eq!(AuthError::Forbidden.public_code(), "FORBIDDEN");
    }

    #[test]
    fn test_public_message_hides_cause() {
        assert_eq!(
            AuthError::BadSignature.public_message(),
            AuthError::TokenRevoked.public_message()
        );
        let err = AuthError::Hashing("rng unavailable".to_string());
        assert_eq!(err.status_code(), 500);
        assert!(!err.public_message().contains("rng"));
    }
}
