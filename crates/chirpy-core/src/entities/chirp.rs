//! Chirp entity - a short post owned by a user

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ChirpBody;

/// Chirp entity. The body is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chirp {
    pub id: Uuid,
    pub body: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chirp {
    /// Create a new Chirp
    pub fn new(id: Uuid, user_id: Uuid, body: ChirpBody) -> Self {
        let now = Utc::now();
        Self {
            id,
            body: body.into_inner(),
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether `user_id` is the author of this chirp
    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chirp_ownership() {
        let owner = Uuid::new_v4();
        let chirp = Chirp::new(Uuid::new_v4(), owner, ChirpBody::parse("hello").unwrap());
        assert!(chirp.is_owned_by(owner));
        assert!(!chirp.is_owned_by(Uuid::new_v4()));
        assert_eq!(chirp.body, "hello");
    }
}
