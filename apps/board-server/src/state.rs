//! Application state - shared across all handlers.

use std::sync::Arc;

use board_core::BoardService;
use board_core::ports::BoardStore;
use board_infra::InMemoryBoardStore;

#[cfg(feature = "postgres")]
use board_infra::{SeaOrmBoardStore, database::connect};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub board: BoardService,
}

impl AppState {
    /// Build the application state with the configured store.
    ///
    /// Falls back to the in-memory store when no database is configured or
    /// the pool cannot be opened. Fails only when requested migrations fail.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        let store: Arc<dyn BoardStore> = match &config.database {
            Some(db_config) => match connect(db_config).await {
                Ok(db) => {
                    if config.run_migrations {
                        use migration::MigratorTrait;

                        migration::Migrator::up(&db, None).await?;
                        tracing::info!("Database migrations applied");
                    }
                    Arc::new(SeaOrmBoardStore::new(db))
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryBoardStore::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryBoardStore::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let store: Arc<dyn BoardStore> = {
            if config.run_migrations {
                tracing::warn!("DB_RUN_MIGRATIONS ignored without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory store");
            Arc::new(InMemoryBoardStore::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn BoardStore>) -> Self {
        Self {
            board: BoardService::new(store),
        }
    }

    /// State backed by a fresh in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryBoardStore::new()))
    }
}
