//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.
//! Rows are written by binding entity fields directly, so no insert structs
//! are needed.

mod chirp;
mod refresh_token;
mod user;
