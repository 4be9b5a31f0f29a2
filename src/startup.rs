use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::db::Database;
use crate::seed::seed_demo_data;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid database path: {0}")]
    DatabasePath(String),
}

/// Open the invoice store described by `config`, seeding it if requested
pub async fn initialize_database(config: &Config) -> Result<Database, DashboardError> {
    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            info!("Creating data directory: {}", parent.display());
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let path = config.database_path.to_str().ok_or_else(|| {
        DashboardError::DatabasePath(config.database_path.display().to_string())
    })?;
    let database = Database::new(path).await?;

    if config.seed_demo_data {
        seed_demo_data(&database).await?;
    }

    Ok(database)
}
