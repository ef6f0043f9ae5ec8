/**
 * Typed Collections
 *
 * `Collection<E>` wraps the untyped record store for one entity type. The
 * conversion between `Record` and the entity goes through serde, so an
 * entity only has to say which collection it lives in.
 */
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::backend::store::{CollectionKind, RecordStore, StoreError, StoreResult};
use crate::shared::model::{BoardList, Card, Fields, Record, User};

/// A record type stored in one collection
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: CollectionKind;

    fn from_record(record: Record) -> StoreResult<Self> {
        Ok(serde_json::from_value(serde_json::to_value(record)?)?)
    }
}

impl Entity for BoardList {
    const COLLECTION: CollectionKind = CollectionKind::Lists;
}

impl Entity for Card {
    const COLLECTION: CollectionKind = CollectionKind::Cards;
}

impl Entity for User {
    const COLLECTION: CollectionKind = CollectionKind::Users;
}

/// Typed view over one collection of the record store
pub struct Collection<E> {
    store: Arc<dyn RecordStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Collection<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Collection<E> {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub async fn list(&self) -> StoreResult<Vec<E>> {
        self.store
            .list(E::COLLECTION)
            .await?
            .into_iter()
            .map(E::from_record)
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<E>> {
        self.store
            .get_by_id(E::COLLECTION, id)
            .await?
            .map(E::from_record)
            .transpose()
    }

    pub async fn insert(&self, fields: Fields) -> StoreResult<E> {
        E::from_record(self.store.insert(E::COLLECTION, fields).await?)
    }

    pub async fn update_by_id(&self, id: &str, patch: Fields) -> StoreResult<E> {
        E::from_record(self.store.update_by_id(E::COLLECTION, id, patch).await?)
    }

    pub async fn remove_by_id(&self, id: &str) -> StoreResult<()> {
        self.store.remove_by_id(E::COLLECTION, id).await
    }
}

/// Turn a JSON value into a field map, rejecting anything but objects
pub fn into_fields(value: Value) -> StoreResult<Fields> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidRecord(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}
