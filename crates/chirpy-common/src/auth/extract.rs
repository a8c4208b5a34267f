//! `Authorization` header parsing

use http::{header::AUTHORIZATION, HeaderMap};

use super::error::AuthError;

/// Scheme for user credentials (access and refresh tokens)
pub const BEARER_SCHEME: &str = "Bearer";

/// Scheme for service credentials (webhook callers)
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extract the token from `Authorization: Bearer <token>`
///
/// # Errors
/// Returns `AuthError::MissingAuth` if the header is absent, unreadable,
/// uses another scheme, or carries an empty value
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    credential(headers, BEARER_SCHEME)
}

/// Extract the key from `Authorization: ApiKey <key>`
///
/// # Errors
/// Returns `AuthError::MissingAuth` under the same conditions as [`bearer_token`]
pub fn api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    credential(headers, API_KEY_SCHEME)
}

fn credential<'a>(headers: &'a HeaderMap, scheme: &str) -> Result<&'a str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingAuth)?
        .trim();

    let (given, rest) = value.split_once(' ').ok_or(AuthError::MissingAuth)?;
    if !given.eq_ignore_ascii_case(scheme) {
        return Err(AuthError::MissingAuth);
    }

    let credential = rest.trim();
    if credential.is_empty() {
        return Err(AuthError::MissingAuth);
    }

    Ok(credential)
}
