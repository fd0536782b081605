//! Persistence backends for list items. Each backend owns its records; the service holds none.

mod memory;
#[cfg(feature = "mongodb")]
mod mongo;
mod postgres;

pub use memory::MemoryListStore;
#[cfg(feature = "mongodb")]
pub use mongo::MongoListStore;
pub use postgres::{ensure_database_exists, PgListStore};

use crate::config::{ServerConfig, StoreBackend};
#[cfg(not(feature = "mongodb"))]
use crate::error::ConfigError;
use crate::error::AppError;
use crate::migration::apply_migrations;
use crate::model::{ListId, ListItem};
use async_trait::async_trait;
use std::sync::Arc;

/// Name of the table / collection holding list items.
pub const LISTS_COLLECTION: &str = "lists";

#[async_trait]
pub trait ListStore: Send + Sync + 'static {
    /// Short backend name for logs and readiness output.
    fn backend(&self) -> &'static str;

    /// Convert a raw path parameter into this store's id form.
    fn parse_id(&self, raw: &str) -> Result<ListId, AppError>;

    async fn insert(&self, list: &str) -> Result<ListItem, AppError>;

    /// All records in the store's default order.
    async fn fetch_all(&self) -> Result<Vec<ListItem>, AppError>;

    async fn fetch_one(&self, id: &ListId) -> Result<Option<ListItem>, AppError>;

    /// Overwrite `list` of an existing record. `None` when no record has that id.
    async fn update(&self, id: &ListId, list: &str) -> Result<Option<ListItem>, AppError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: &ListId) -> Result<bool, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// Build the configured backend. PostgreSQL gets its database and `lists` table created first.
pub async fn connect(config: &ServerConfig) -> Result<Arc<dyn ListStore>, AppError> {
    match config.backend {
        StoreBackend::Postgres => {
            let pg = &config.postgres;
            if pg.create_database {
                ensure_database_exists(&pg.url).await?;
            }
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(pg.max_connections)
                .connect(&pg.url)
                .await?;
            apply_migrations(&pool).await?;
            Ok(Arc::new(PgListStore::new(pool)))
        }
        StoreBackend::Memory => Ok(Arc::new(MemoryListStore::new())),
        #[cfg(feature = "mongodb")]
        StoreBackend::MongoDb => {
            let store = MongoListStore::connect(&config.mongo.uri, &config.mongo.database).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "mongodb"))]
        StoreBackend::MongoDb => Err(ConfigError::BackendUnavailable("mongodb").into()),
    }
}
