//! Shared state behind the in-memory repositories

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use chirpy_core::entities::{Chirp, RefreshToken, User};

#[derive(Debug, Clone)]
pub(super) struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

#[derive(Debug, Default)]
pub(super) struct Tables {
    pub users: HashMap<Uuid, StoredUser>,
    // Insertion order doubles as the tiebreak for equal timestamps
    pub chirps: Vec<Chirp>,
    pub refresh_tokens: HashMap<String, RefreshToken>,
}

impl Tables {
    pub fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users.values().any(|stored| {
            Some(stored.user.id) != except && stored.user.email.eq_ignore_ascii_case(email)
        })
    }
}

/// Shared tables for the in-memory repositories
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(super) tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of users currently stored
    pub fn user_count(&self) -> usize {
        self.tables.read().users.len()
    }

    /// Number of chirps currently stored
    pub fn chirp_count(&self) -> usize {
        self.tables.read().chirps.len()
    }
}
