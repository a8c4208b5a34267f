//! Normalised email address
//!
//! Emails are compared case-insensitively, so the canonical form is trimmed
//! and lower-cased before it ever reaches storage.

use std::fmt;

use crate::error::DomainError;

/// A trimmed, lower-cased email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Normalise and minimally validate an email address
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_lowercase();

        let Some((local, domain)) = normalized.split_once('@') else {
            return Err(DomainError::InvalidEmail);
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(DomainError::InvalidEmail);
        }

        Ok(Self(normalized))
    }

    /// Borrow the canonical form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the canonical string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
