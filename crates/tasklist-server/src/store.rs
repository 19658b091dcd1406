//! Item store initialization
//!
//! Builds the `ItemRepository` implementation selected by configuration.
//! Failing to reach the database here is fatal to the process.

use anyhow::Result;
use std::sync::Arc;
use tasklist_repository::{InMemoryItemRepository, ItemRepository};
use tracing::{info, warn};

use crate::config::{ServerConfig, StoreType};

/// Create the configured item repository
pub async fn init_repository(config: &ServerConfig) -> Result<Arc<dyn ItemRepository>> {
    match config.store {
        StoreType::Memory => {
            warn!("Using in-memory store; items are lost on restart");
            Ok(Arc::new(InMemoryItemRepository::new()))
        }
        StoreType::Postgres => connect_postgres(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(config: &ServerConfig) -> Result<Arc<dyn ItemRepository>> {
    use tasklist_repository::PostgresItemRepository;

    info!(
        "Connecting to PostgreSQL (max {} connections)",
        config.max_connections
    );
    let repo = PostgresItemRepository::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;

    if config.auto_migrate {
        repo.ensure_schema()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to prepare schema: {}", e))?;
    }

    info!("Connection success");
    Ok(Arc::new(repo))
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(_config: &ServerConfig) -> Result<Arc<dyn ItemRepository>> {
    warn!("PostgreSQL store feature not enabled");
    Err(anyhow::anyhow!(
        "Enable the 'postgres' feature to use the PostgreSQL store"
    ))
}
