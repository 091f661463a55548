//! Database migration runner.

use sqlx::SqlitePool;
use tracing::info;

use campushub_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
///
/// Migrations are idempotent; running them against an up-to-date schema
/// is a no-op.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
