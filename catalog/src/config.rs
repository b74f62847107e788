//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable overrides. The configuration
//! file path defaults to `config.yaml` but can be specified via `-f` flag or `CATALOG_CONFIG`
//! environment variable. Every key is optional; a missing file yields the defaults.
//!
//! ## Loading Priority
//!
//! Configuration sources are merged in the following order (later sources override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`)
//! 2. **Environment variables** - Variables prefixed with `CATALOG_` override YAML values
//! 3. **DATABASE_URL** - Special case: overrides `database.url` if set
//!
//! For nested config values, use double underscores in environment variables. For example,
//! `CATALOG_DATABASE__POOL__MAX_CONNECTIONS=4` sets the `database.pool.max_connections` field.
//!
//! ## Usage
//!
//! ```no_run
//! use clap::Parser;
//! use catalog::config::{Args, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let args = Args::parse();
//! let config = Config::load(&args)?;
//!
//! println!("Server will bind to {}", config.bind_address());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Variable Examples
//!
//! ```bash
//! # Override server port
//! CATALOG_PORT=3000
//!
//! # Point at another database file
//! DATABASE_URL="sqlite:///var/lib/catalog/catalog.db"
//!
//! # Emit JSON logs
//! CATALOG_LOG_FORMAT=json
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::Error;

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "CATALOG_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// All fields have defaults defined in the `Default` implementation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// SQLite database settings
    pub database: DatabaseConfig,
    /// Threshold in milliseconds for logging slow SQL statements (default: 1000ms)
    pub slow_statement_threshold_ms: u64,
    /// Console log output format
    pub log_format: LogFormat,
    /// Enable OpenTelemetry OTLP export for distributed tracing
    pub enable_otel_export: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database: DatabaseConfig::default(),
            slow_statement_threshold_ms: 1000,
            log_format: LogFormat::default(),
            enable_otel_export: false,
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://catalog.db` or `sqlite::memory:`
    pub url: String,
    /// Create the database file when it doesn't exist yet
    pub create_if_missing: bool,
    /// Apply the embedded schema migrations at startup
    pub run_migrations: bool,
    /// Connection pool settings
    pub pool: PoolSettings,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://catalog.db".to_string(),
            create_if_missing: true,
            run_migrations: true,
            pool: PoolSettings::default(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the URL names an in-memory database.
    ///
    /// Each in-memory connection is its own database, so such pools are held to one connection.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Connection pool configuration with the SQLx parameters we expose.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolSettings {
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of idle connections to maintain
    pub min_connections: u32,
    /// Maximum time to wait for a connection (seconds)
    pub acquire_timeout_secs: u64,
    /// Time before idle connections are closed (seconds, 0 = never)
    pub idle_timeout_secs: u64,
    /// Maximum lifetime of a connection (seconds, 0 = never)
    pub max_lifetime_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 0,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,  // 10 minutes
            max_lifetime_secs: 1800, // 30 minutes
        }
    }
}

impl PoolSettings {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_secs > 0).then(|| Duration::from_secs(self.idle_timeout_secs))
    }

    pub fn max_lifetime(&self) -> Option<Duration> {
        (self.max_lifetime_secs > 0).then(|| Duration::from_secs(self.max_lifetime_secs))
    }
}

/// Console log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        let config: Self = Self::figment(args).extract()?;
        config.validate().map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<(), Error> {
        if self.port == 0 {
            return Err(Error::Other(anyhow::anyhow!("Config validation: port must be non-zero")));
        }

        if !self.database.url.starts_with("sqlite:") {
            return Err(Error::Other(anyhow::anyhow!(
                "Config validation: database.url must be a sqlite: URL, got '{}'",
                self.database.url
            )));
        }

        let pool = &self.database.pool;
        if pool.max_connections == 0 {
            return Err(Error::Other(anyhow::anyhow!(
                "Config validation: database.pool.max_connections must be greater than 0"
            )));
        }

        if pool.min_connections > pool.max_connections {
            return Err(Error::Other(anyhow::anyhow!(
                "Config validation: database.pool.min_connections ({}) cannot be greater than max_connections ({})",
                pool.min_connections,
                pool.max_connections
            )));
        }

        if pool.acquire_timeout_secs == 0 {
            return Err(Error::Other(anyhow::anyhow!(
                "Config validation: database.pool.acquire_timeout_secs must be greater than 0"
            )));
        }

        Ok(())
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            .merge(Yaml::file(&args.config))
            // CATALOG_CONFIG names the file itself, it isn't a config key
            .merge(Env::prefixed("CATALOG_").ignore(&["config"]).split("__"))
            .merge(Env::raw().only(&["DATABASE_URL"]).map(|_| "database.url".into()))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
