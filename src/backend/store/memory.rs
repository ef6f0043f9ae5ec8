/**
 * In-Memory Record Store
 *
 * Keeps every collection in a vector behind a single `RwLock`, so records
 * come back in insertion order and each write runs to completion before the
 * next one starts. Nothing survives a restart; the server falls back to this
 * store when no database is configured.
 */
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::backend::store::{new_record_id, CollectionKind, RecordStore, StoreError, StoreResult};
use crate::shared::model::{Fields, Record};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<CollectionKind, Vec<Record>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self, collection: CollectionKind) -> StoreResult<Vec<Record>> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).cloned().unwrap_or_default())
    }

    async fn get_by_id(&self, collection: CollectionKind, id: &str) -> StoreResult<Option<Record>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|records| records.iter().find(|record| record.id == id))
            .cloned())
    }

    async fn insert(&self, collection: CollectionKind, fields: Fields) -> StoreResult<Record> {
        let record = Record::new(new_record_id(), fields);
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn update_by_id(
        &self,
        collection: CollectionKind,
        id: &str,
        patch: Fields,
    ) -> StoreResult<Record> {
        let mut collections = self.collections.write().await;
        let record = collections
            .get_mut(&collection)
            .and_then(|records| records.iter_mut().find(|record| record.id == id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        record.merge(&patch);
        Ok(record.clone())
    }

    async fn remove_by_id(&self, collection: CollectionKind, id: &str) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let records = collections
            .get_mut(&collection)
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        let position = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        records.remove(position);
        Ok(())
    }
}
