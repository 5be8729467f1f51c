use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Connection pool settings for the board database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            sqlx_logging: true,
        }
    }
}

/// Open the connection pool.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection pool...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout)
        .sqlx_logging(config.sqlx_logging)
        .to_owned();

    let db = Database::connect(opts).await?;
    tracing::info!(
        "Database connected (pool: {}..{})",
        config.min_connections,
        config.max_connections
    );

    Ok(db)
}
