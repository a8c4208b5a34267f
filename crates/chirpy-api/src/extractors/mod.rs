//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and query/path parsing.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AuthUser, RefreshBearer, ServiceCaller};
pub use path::ChirpIdPath;
pub use query::ApiQuery;
pub use validated::ValidatedJson;
