use crate::core::config::DatabaseConfig;
use crate::core::error::AppError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Map a failed read into `AppError`, logging the context
pub fn read_error(e: sqlx::Error, context: &str) -> AppError {
    tracing::error!("Failed to {}: {:?}", context, e);
    AppError::Database(e)
}

/// Map a failed insert/update into `AppError`.
///
/// Unique-index violations become `Conflict`: the index is the final arbiter for
/// natural keys, the service-level duplicate lookup only rejects early.
pub fn write_error(e: sqlx::Error, context: &str, conflict_message: impl FnOnce() -> String) -> AppError {
    let unique_violation = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if unique_violation {
        tracing::warn!("Unique constraint rejected {}", context);
        return AppError::Conflict(conflict_message());
    }

    read_error(e, context)
}
