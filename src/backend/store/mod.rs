//! Record Store Module
//!
//! Id-indexed record collections for `users`, `lists` and `cards`.
//!
//! # Architecture
//!
//! - **`RecordStore`** - object-safe async trait over untyped [`Record`]s,
//!   injected into the application state as `Arc<dyn RecordStore>`
//! - **`Collection<E>`** - typed view over one collection, implemented once
//!   and reused for every [`Entity`]
//! - **`memory`** - in-memory implementation (tests, no database configured)
//! - **`sqlite`** - durable implementation backed by sqlx/SQLite
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs        - Trait, collection kinds, errors
//! ├── collection.rs - Typed collection wrapper and Entity trait
//! ├── memory.rs     - In-memory store
//! └── sqlite.rs     - SQLite store
//! ```
//!
//! # Semantics
//!
//! - `insert` always assigns a fresh UUID; a client-supplied `id` is dropped
//! - `update_by_id` is a shallow merge and fails with `NotFound` for unknown ids
//! - `remove_by_id` fails with `NotFound` for unknown ids, so removing twice fails
//! - `list` returns records in insertion order
//! - every write is durable (for the SQLite store) before the call returns
//!
//! Implementations run each read-modify-write as a critical section per
//! collection, since handlers run concurrently on the tokio runtime.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::shared::model::{Fields, Record, RecordId};

/// Typed collection wrapper
pub mod collection;

/// In-memory store
pub mod memory;

/// SQLite store
pub mod sqlite;

pub use collection::{into_fields, Collection, Entity};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// The record collections known to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Users,
    Lists,
    Cards,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [Self::Users, Self::Lists, Self::Cards];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Lists => "lists",
            Self::Cards => "cards",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id does not resolve to a record in the collection
    #[error("{collection} record '{id}' not found")]
    NotFound {
        collection: CollectionKind,
        id: RecordId,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored or submitted value is not a JSON object
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl StoreError {
    pub fn not_found(collection: CollectionKind, id: impl Into<RecordId>) -> Self {
        Self::NotFound {
            collection,
            id: id.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Id-indexed record collections
///
/// Absence on lookup is `Ok(None)`, never an error. Mutations on a missing
/// id fail with [`StoreError::NotFound`].
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every record in the collection, in insertion order
    async fn list(&self, collection: CollectionKind) -> StoreResult<Vec<Record>>;

    async fn get_by_id(&self, collection: CollectionKind, id: &str) -> StoreResult<Option<Record>>;

    /// Insert a record under a freshly generated id
    async fn insert(&self, collection: CollectionKind, fields: Fields) -> StoreResult<Record>;

    /// Shallow-merge `patch` onto the record and return the merged result
    async fn update_by_id(
        &self,
        collection: CollectionKind,
        id: &str,
        patch: Fields,
    ) -> StoreResult<Record>;

    async fn remove_by_id(&self, collection: CollectionKind, id: &str) -> StoreResult<()>;

    /// Whether every collection is empty (used to decide on seeding)
    async fn is_empty(&self) -> StoreResult<bool> {
        for collection in CollectionKind::ALL {
            if !self.list(collection).await?.is_empty() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Generate a fresh record id
pub(crate) fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}
