use crate::db::models::CatRecord;
use crate::db::schema::SQLITE_INIT;
use crate::error::CatformError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct CatsStorage {
    pool: SqlitePool,
}

impl CatsStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`, creating the database file if missing.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, CatformError> {
        info!(max_connections, "connecting to database");
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Safe to repeat.
    pub async fn init_schema(&self) -> Result<(), CatformError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        debug!("schema ready");
        Ok(())
    }

    /// Insert one submission. The single statement commits on its own.
    pub async fn insert(&self, cat: &CatRecord) -> Result<(), CatformError> {
        sqlx::query("INSERT INTO cats (name, coat, donut) VALUES (?, ?, ?)")
            .bind(&cat.name)
            .bind(&cat.coat)
            .bind(&cat.donut)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, CatformError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cats")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// All rows in insertion order.
    pub async fn list(&self) -> Result<Vec<CatRecord>, CatformError> {
        let rows = sqlx::query_as::<_, CatRecord>(
            "SELECT name, coat, donut FROM cats ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// `(column, declared type)` pairs of the `cats` table, in column order.
    pub async fn cats_columns(&self) -> Result<Vec<(String, String)>, CatformError> {
        let cols = sqlx::query_as::<_, (String, String)>(
            "SELECT name, type FROM pragma_table_info('cats') ORDER BY cid",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(cols)
    }

    /// Number of tables named `cats`; 0 before `init_schema`, 1 after.
    pub async fn cats_table_count(&self) -> Result<i64, CatformError> {
        let rec: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'cats'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(rec.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One connection so every query sees the same in-memory database.
    async fn memory_storage() -> CatsStorage {
        CatsStorage::connect("sqlite::memory:", 1)
            .await
            .expect("open in-memory sqlite")
    }

    fn cat(name: &str, coat: &str, donut: &str) -> CatRecord {
        CatRecord {
            name: name.to_string(),
            coat: coat.to_string(),
            donut: donut.to_string(),
        }
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let storage = memory_storage().await;
        assert_eq!(storage.cats_table_count().await.unwrap(), 0);

        for _ in 0..3 {
            storage.init_schema().await.unwrap();
        }

        assert_eq!(storage.cats_table_count().await.unwrap(), 1);
        assert_eq!(
            storage.cats_columns().await.unwrap(),
            vec![
                ("name".to_string(), "TEXT".to_string()),
                ("coat".to_string(), "TEXT".to_string()),
                ("donut".to_string(), "TEXT".to_string()),
            ]
        );
        assert_eq!(storage.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_adds_one_row_verbatim() {
        let storage = memory_storage().await;
        storage.init_schema().await.unwrap();

        let whiskers = cat("Whiskers", "tabby", "glazed");
        storage.insert(&whiskers).await.unwrap();
        assert_eq!(storage.count().await.unwrap(), 1);

        let odd = cat("  Robert'); DROP TABLE cats;--", "", "Ünïcode");
        storage.insert(&odd).await.unwrap();

        assert_eq!(storage.list().await.unwrap(), vec![whiskers, odd]);
    }

    #[tokio::test]
    async fn duplicates_are_kept() {
        let storage = memory_storage().await;
        storage.init_schema().await.unwrap();

        let c = cat("Tom", "grey", "jam");
        storage.insert(&c).await.unwrap();
        storage.insert(&c).await.unwrap();

        assert_eq!(storage.list().await.unwrap(), vec![c.clone(), c]);
    }

    #[tokio::test]
    async fn insert_before_schema_fails() {
        let storage = memory_storage().await;
        let err = storage
            .insert(&cat("Whiskers", "tabby", "glazed"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatformError::DatabaseError(_)));
    }
}
