//! # chirpy-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `chirpy-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The [`memory`] module holds lock-based in-memory implementations of the
//! same traits for tests and database-less local runs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chirpy_db::{create_pool, run_migrations, PgUserRepository, PoolConfig};
//!
//! async fn example(config: &chirpy_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from(config)).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, run_migrations_from, PgPool, PoolConfig};
pub use repositories::{PgChirpRepository, PgRefreshTokenRepository, PgUserRepository};
