//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use board_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    /// Apply pending schema migrations before serving.
    pub run_migrations: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            #[cfg(feature = "postgres")]
            database: Self::database_from_env(),
            run_migrations: env::var("DB_RUN_MIGRATIONS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// `None` when `DATABASE_URL` is unset; the server then keeps posts in memory.
    #[cfg(feature = "postgres")]
    fn database_from_env() -> Option<DatabaseConfig> {
        env::var("DATABASE_URL").ok().map(|url| {
            let defaults = DatabaseConfig::new(url);
            DatabaseConfig {
                max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.max_connections),
                min_connections: parse_var("DB_MIN_CONNECTIONS", defaults.min_connections),
                connect_timeout: Duration::from_secs(parse_var(
                    "DB_CONNECT_TIMEOUT_SECS",
                    defaults.connect_timeout.as_secs(),
                )),
                idle_timeout: Duration::from_secs(parse_var(
                    "DB_IDLE_TIMEOUT_SECS",
                    defaults.idle_timeout.as_secs(),
                )),
                ..defaults
            }
        })
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
