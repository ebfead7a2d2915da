//! Schema initialization.

use sqlx::PgPool;
use sqlx::migrate::MigrateError;

/// Creates the `visited_links` table and its index if they are absent.
///
/// Runs the embedded migrations from `./migrations`. Safe to call on every
/// start: applied migrations are skipped and the DDL itself uses
/// `IF NOT EXISTS`.
///
/// # Errors
///
/// Returns [`MigrateError`] if the database is unreachable or a migration fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database schema is up to date");
    Ok(())
}
