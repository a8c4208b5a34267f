//! User entity - represents an account holder

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Email;

/// User entity. The password hash is deliberately not part of the entity;
/// repositories hand it out separately for credential checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub is_chirpy_red: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User on the free tier
    pub fn new(id: Uuid, email: Email) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into_inner(),
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if user is on the premium tier
    #[inline]
    pub fn is_premium(&self) -> bool {
        self.is_chirpy_red
    }

    /// Replace the email address
    pub fn set_email(&mut self, email: Email) {
        self.email = email.into_inner();
        self.updated_at = Utc::now();
    }
}
