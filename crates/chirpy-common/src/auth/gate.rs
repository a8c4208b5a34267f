//! Request gate
//!
//! Composes header extraction with token or key verification. Every
//! failure surfaces as an [`AuthError`] so callers can map it to a
//! response without inspecting the cause.

use http::HeaderMap;
use uuid::Uuid;

use super::{
    error::AuthError,
    extract::{api_key, bearer_token},
    jwt::JwtService,
};

/// Authenticate a user request and return the subject of its access token
///
/// # Errors
/// Returns `MissingAuth`, `MalformedToken`, `BadSignature` or `ExpiredToken`
pub fn authenticate(headers: &HeaderMap, jwt: &JwtService) -> Result<Uuid, AuthError> {
    let token = bearer_token(headers)?;
    jwt.validate(token)
}

/// Authenticate a service request against the configured API key
///
/// An empty configured key rejects every caller.
///
/// # Errors
/// Returns `MissingAuth` if no key was presented, `InvalidApiKey` otherwise
pub fn authenticate_service(headers: &HeaderMap, expected: &str) -> Result<(), AuthError> {
    let presented = api_key(headers)?;

    if expected.is_empty() || !constant_time_eq(presented.as_bytes(), expected.as_bytes()) {
        return Err(AuthError::InvalidApiKey);
    }

    Ok(())
}

/// Require that the authenticated subject owns the resource
///
/// # Errors
/// Returns `AuthError::Forbidden` when the ids differ
pub fn authorize_ownership(subject: Uuid, owner: Uuid) -> Result<(), AuthError> {
    if subject == owner {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

// Runtime does not depend on where the first differing byte is.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use http::{header::AUTHORIZATION, HeaderValue};

    fn with_auth(value: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        map
    }

    fn jwt() -> JwtService {
        JwtService::new("gate-test-secret", 3600, 60)
    }

    #[test]
    fn test_authenticate_valid_token() {
        let jwt = jwt();
        let user_id = Uuid::new_v4();
        let token = jwt.issue_access_token(user_id).unwrap();

        let subject = authenticate(&with_auth(&format!("Bearer {token}")), &jwt).unwrap();
        assert_eq!(subject, user_id);
    }

    #[test]
    fn test_authenticate_missing_header() {
        assert_eq!(
            authenticate(&HeaderMap::new(), &jwt()),
            Err(AuthError::MissingAuth)
        );
    }

    #[test]
    fn test_authenticate_expired_token() {
        let jwt = jwt();
        let token = jwt
            .issue_at(
                Uuid::new_v4(),
                Duration::seconds(1),
                Utc::now() - Duration::seconds(10),
            )
            .unwrap();

        assert_eq!(
            authenticate(&with_auth(&format!("Bearer {token}")), &jwt),
            Err(AuthError::ExpiredToken)
        );
    }

    #[test]
    fn test_authenticate_service() {
        let headers = with_auth("ApiKey secret-key");

        assert_eq!(authenticate_service(&headers, "secret-key"), Ok(()));
        assert_eq!(
            authenticate_service(&headers, "secret-kez"),
            Err(AuthError::InvalidApiKey)
        );
        assert_eq!(
            authenticate_service(&headers, "secret"),
            Err(AuthError::InvalidApiKey)
        );
    }

    #[test]
    fn test_authenticate_service_empty_expected_rejects() {
        assert_eq!(
            authenticate_service(&with_auth("ApiKey anything"), ""),
            Err(AuthError::InvalidApiKey)
        );
    }

    #[test]
    fn test_authenticate_service_missing() {
        assert_eq!(
            authenticate_service(&HeaderMap::new(), "k"),
            Err(AuthError::MissingAuth)
        );
    }

    #[test]
    fn test_authorize_ownership() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert_eq!(authorize_ownership(a, a), Ok(()));
        assert_eq!(authorize_ownership(a, b), Err(AuthError::Forbidden));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }
}
