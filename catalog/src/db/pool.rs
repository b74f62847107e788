//! SQLite connection pool construction.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;

use crate::config::Config;
use crate::db::errors::{DbError, Result};

/// Build connect options for the configured database URL.
///
/// Statements running longer than `slow_statement_threshold_ms` are logged at warn level.
pub fn connect_options(config: &Config) -> Result<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(&config.database.url)
        .map_err(|e| DbError::Other(anyhow::anyhow!("Invalid database URL '{}': {}", config.database.url, e)))?
        .create_if_missing(config.database.create_if_missing)
        .log_statements(log::LevelFilter::Debug)
        .log_slow_statements(
            log::LevelFilter::Warn,
            Duration::from_millis(config.slow_statement_threshold_ms),
        );

    Ok(options)
}

/// Pool options derived from the configured pool settings.
pub fn pool_options(config: &Config) -> SqlitePoolOptions {
    let settings = &config.database.pool;

    if config.database.is_in_memory() {
        // Every in-memory connection is a separate database: keep exactly one, forever
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(settings.acquire_timeout())
            .idle_timeout(None)
            .max_lifetime(None);
    }

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime())
}

/// Open the pool described by `config`.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let options = connect_options(config)?;
    let pool = pool_options(config).connect_with(options).await?;

    info!(
        "Connected to {} (pool: {} connections max)",
        config.database.url,
        pool.options().get_max_connections()
    );

    Ok(pool)
}
