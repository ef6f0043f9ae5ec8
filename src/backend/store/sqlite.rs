/**
 * SQLite Record Store
 *
 * Durable store backed by a single `records` table (see `migrations/`).
 * Each row holds one record: the collection name, the record id and the
 * remaining fields as a JSON text body. An autoincrement `seq` column keeps
 * insertion order.
 *
 * # Write Serialization
 *
 * Writes take a per-collection mutex and run inside a transaction, so the
 * lookup-then-mutate steps of `update_by_id` and `remove_by_id` cannot
 * interleave with another write to the same collection. A write has been
 * committed by the time the call returns.
 */
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::collections::HashMap;
use std::str::FromStr;
use tokio::sync::Mutex;

use crate::backend::store::collection::into_fields;
use crate::backend::store::{new_record_id, CollectionKind, RecordStore, StoreError, StoreResult};
use crate::shared::model::{Fields, Record};

#[derive(Debug, sqlx::FromRow)]
struct RecordRow {
    id: String,
    body: String,
}

impl RecordRow {
    fn into_record(self) -> StoreResult<Record> {
        let fields = into_fields(serde_json::from_str(&self.body)?)?;
        Ok(Record::new(self.id, fields))
    }
}

pub struct SqliteStore {
    pool: SqlitePool,
    write_locks: HashMap<CollectionKind, Mutex<()>>,
}

impl SqliteStore {
    /// Connect to (or create) the database at `url` and apply migrations
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use boardcast::backend::store::SqliteStore;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let store = SqliteStore::connect("sqlite://board.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::from_pool(pool).await
    }

    /// Private in-memory database, mostly for tests
    ///
    /// Every SQLite in-memory connection is its own database, so the pool is
    /// pinned to a single connection that never expires.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::migrate!().run(&pool).await?;

        let write_locks = CollectionKind::ALL
            .into_iter()
            .map(|collection| (collection, Mutex::new(())))
            .collect();

        Ok(Self { pool, write_locks })
    }

    fn write_lock(&self, collection: CollectionKind) -> &Mutex<()> {
        // Every kind is inserted in `from_pool`
        &self.write_locks[&collection]
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn list(&self, collection: CollectionKind) -> StoreResult<Vec<Record>> {
        sqlx::query_as::<_, RecordRow>(
            "SELECT id, body FROM records WHERE collection = ? ORDER BY seq",
        )
        .bind(collection.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(RecordRow::into_record)
        .collect()
    }

    async fn get_by_id(&self, collection: CollectionKind, id: &str) -> StoreResult<Option<Record>> {
        sqlx::query_as::<_, RecordRow>(
            "SELECT id, body FROM records WHERE collection = ? AND id = ?",
        )
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(RecordRow::into_record)
        .transpose()
    }

    async fn insert(&self, collection: CollectionKind, fields: Fields) -> StoreResult<Record> {
        let record = Record::new(new_record_id(), fields);
        let body = serde_json::to_string(&record.fields)?;

        let _guard = self.write_lock(collection).lock().await;
        sqlx::query("INSERT INTO records (collection, id, body) VALUES (?, ?, ?)")
            .bind(collection.as_str())
            .bind(&record.id)
            .bind(body)
            .execute(&self.pool)
            .await?;

        Ok(record)
    }

    async fn update_by_id(
        &self,
        collection: CollectionKind,
        id: &str,
        patch: Fields,
    ) -> StoreResult<Record> {
        let _guard = self.write_lock(collection).lock().await;
        let mut tx = self.pool.begin().await?;

        let mut record = sqlx::query_as::<_, RecordRow>(
            "SELECT id, body FROM records WHERE collection = ? AND id = ?",
        )
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| StoreError::not_found(collection, id))?
        .into_record()?;

        record.merge(&patch);

        sqlx::query("UPDATE records SET body = ? WHERE collection = ? AND id = ?")
            .bind(serde_json::to_string(&record.fields)?)
            .bind(collection.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(record)
    }

    async fn remove_by_id(&self, collection: CollectionKind, id: &str) -> StoreResult<()> {
        let _guard = self.write_lock(collection).lock().await;

        let result = sqlx::query("DELETE FROM records WHERE collection = ? AND id = ?")
            .bind(collection.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(collection, id));
        }
        Ok(())
    }
}
