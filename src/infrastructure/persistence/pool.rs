//! PostgreSQL connection pool construction.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::DatabaseConfig;

/// Opens a bounded connection pool and verifies connectivity.
///
/// Requests that find every connection busy wait up to
/// `config.acquire_timeout` seconds before failing.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the TLS handshake fails.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        max_connections = config.max_connections,
        tls_mode = %config.tls_mode,
        "Creating database pool"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout))
        .idle_timeout(Some(Duration::from_secs(config.idle_timeout)))
        .max_lifetime(Some(Duration::from_secs(config.max_lifetime)))
        .connect_with(config.connect_options())
        .await
}
