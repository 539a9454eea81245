use std::sync::Arc;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::adapters::{GuestStoreLocal, GuestStoreSea};
use crate::config::db::{sanitize_db_url, LocalStoreLocation, StoreConfig};
use crate::error::AppError;
use crate::repos::GuestStore;
use crate::storage::{FileKvStore, KvStore, MemoryKvStore};

/// Opens a sea-orm connection. Does NOT run migrations.
pub async fn connect_store(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(url.to_string());
    options
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    if url.starts_with("sqlite:") {
        // in-memory databases live and die with their single connection
        options.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(options).await?;
    info!(url = %sanitize_db_url(url), "Remote store connected");
    Ok(conn)
}

/// Connects and brings the schema (and seed) up to date.
///
/// Used for SQLite stores, which start empty; Postgres schemas are managed
/// with the migration CLI.
pub async fn connect_and_migrate(url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_store(url).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}

pub fn local_kv(location: &LocalStoreLocation) -> Result<Arc<dyn KvStore>, AppError> {
    Ok(match location {
        LocalStoreLocation::Memory => Arc::new(MemoryKvStore::new()),
        LocalStoreLocation::Dir(dir) => Arc::new(FileKvStore::open(dir).map_err(|e| {
            AppError::config(format!("local store directory unusable: {e}"))
        })?),
    })
}

/// Builds the guest store selected by `config`.
pub async fn open_guest_store(config: &StoreConfig) -> Result<Arc<dyn GuestStore>, AppError> {
    match config {
        StoreConfig::Remote { url } => {
            let conn = if url.starts_with("sqlite:") {
                connect_and_migrate(url).await?
            } else {
                connect_store(url).await?
            };
            Ok(Arc::new(GuestStoreSea::new(conn)))
        }
        StoreConfig::Local { location } => {
            let store = GuestStoreLocal::new(local_kv(location)?);
            store.initialize()?;
            Ok(Arc::new(store))
        }
    }
}
