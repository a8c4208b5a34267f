//! Integration test utilities for the Chirpy server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API over a real socket.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
