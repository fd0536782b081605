//! Schema bootstrap for the PostgreSQL backend.

use crate::error::AppError;
use crate::service::MAX_LIST_LEN;
use crate::store::LISTS_COLLECTION;
use sqlx::PgPool;

/// Create the `lists` table if it does not exist. Idempotent.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            list VARCHAR({}) NOT NULL
        )
        "#,
        LISTS_COLLECTION, MAX_LIST_LEN
    );
    tracing::debug!(sql = %ddl, "migration");
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = LISTS_COLLECTION, "schema ready");
    Ok(())
}
