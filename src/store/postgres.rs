//! PostgreSQL backend: table `lists (id SERIAL PRIMARY KEY, list VARCHAR(200) NOT NULL)`.

use super::ListStore;
use crate::error::AppError;
use crate::model::{ListId, ListItem};
use async_trait::async_trait;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

#[derive(Debug, sqlx::FromRow)]
struct ListRow {
    id: i32,
    list: String,
}

impl From<ListRow> for ListItem {
    fn from(row: ListRow) -> Self {
        ListItem {
            id: ListId::Serial(i64::from(row.id)),
            list: row.list,
        }
    }
}

#[derive(Clone)]
pub struct PgListStore {
    pool: PgPool,
}

impl PgListStore {
    pub fn new(pool: PgPool) -> Self {
        PgListStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Ids that cannot exist in an int4 serial column resolve to "no row" without a query.
fn serial(id: &ListId) -> Option<i32> {
    match id {
        ListId::Serial(n) => i32::try_from(*n).ok(),
        ListId::Object(_) => None,
    }
}

#[async_trait]
impl ListStore for PgListStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    /// Unsigned 32-bit decimal, digits only. Values past the int4 range parse but match no row.
    fn parse_id(&self, raw: &str) -> Result<ListId, AppError> {
        let invalid = || AppError::BadRequest("Invalid ID".into());
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let n: u32 = raw.parse().map_err(|_| invalid())?;
        Ok(ListId::Serial(i64::from(n)))
    }

    async fn insert(&self, list: &str) -> Result<ListItem, AppError> {
        let sql = "INSERT INTO lists (list) VALUES ($1) RETURNING id, list";
        tracing::debug!(sql = %sql, "query");
        let row: ListRow = sqlx::query_as(sql).bind(list).fetch_one(&self.pool).await?;
        Ok(row.into())
    }

    async fn fetch_all(&self) -> Result<Vec<ListItem>, AppError> {
        let sql = "SELECT id, list FROM lists ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<ListRow> = sqlx::query_as(sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(ListItem::from).collect())
    }

    async fn fetch_one(&self, id: &ListId) -> Result<Option<ListItem>, AppError> {
        let Some(id) = serial(id) else {
            return Ok(None);
        };
        let sql = "SELECT id, list FROM lists WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<ListRow> = sqlx::query_as(sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.map(ListItem::from))
    }

    async fn update(&self, id: &ListId, list: &str) -> Result<Option<ListItem>, AppError> {
        let Some(id) = serial(id) else {
            return Ok(None);
        };
        let sql = "UPDATE lists SET list = $1 WHERE id = $2 RETURNING id, list";
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<ListRow> = sqlx::query_as(sql)
            .bind(list)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(ListItem::from))
    }

    async fn delete(&self, id: &ListId) -> Result<bool, AppError> {
        let Some(id) = serial(id) else {
            return Ok(false);
        };
        let sql = "DELETE FROM lists WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let res = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(res.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the database named in `database_url` when it does not exist, via the `postgres`
/// maintenance database on the same server. No-op when the url targets `postgres` itself.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
