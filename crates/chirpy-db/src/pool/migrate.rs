//! Schema migrations

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Location of the bundled SQL migrations
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply the bundled migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    run_migrations_from(pool, Path::new(MIGRATIONS_DIR)).await
}

/// Apply the migrations found in `dir`
pub async fn run_migrations_from(pool: &PgPool, dir: &Path) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir).await?;
    info!(count = migrator.iter().count(), dir = %dir.display(), "Running database migrations");
    migrator.run(pool).await
}
