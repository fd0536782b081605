//! List items: a single-resource CRUD REST backend over a pluggable store.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{ServerConfig, StoreBackend};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{ListId, ListItem, ListPayload};
pub use routes::{app, common_routes_with_ready, list_routes};
pub use service::{validate_list_field, ListService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ListStore, MemoryListStore, PgListStore};
#[cfg(feature = "mongodb")]
pub use store::MongoListStore;
pub use telemetry::{init_tracing, DEFAULT_LOG_DIRECTIVES};
