/**
 * Store Seeding
 *
 * Loads a JSON document of initial records into an empty store at startup:
 *
 * ```json
 * {
 *   "users": [{"username": "demo", "password": "demo"}],
 *   "lists": [{"id": "todo", "name": "To do"}],
 *   "cards": [{"list_id": "todo", "title": "First card"}]
 * }
 * ```
 *
 * Every record gets a fresh store-assigned id. Card `list_id` values that
 * name a seeded list's original id are rewritten to that list's new id, so
 * the seed file can use readable ids. Seed passwords are hashed like any
 * other. Seeding publishes no change events.
 */

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::users::prepare_user_fields;
use crate::backend::error::BackendError;
use crate::backend::store::{into_fields, CollectionKind, RecordStore, StoreError};
use crate::shared::model::{Fields, RecordId};

/// Seed document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<Value>,
    #[serde(default)]
    pub lists: Vec<Value>,
    #[serde(default)]
    pub cards: Vec<Value>,
}

/// Records inserted by a seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub lists: usize,
    pub cards: usize,
}

/// Seeding errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("seed store error: {0}")]
    Store(#[from] StoreError),
    #[error("seed user rejected: {0}")]
    User(#[from] BackendError),
}

impl SeedData {
    pub async fn from_file(path: &Path) -> Result<Self, SeedError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Insert the seed into the store if the store holds no records
///
/// Returns `None` when the store already had data and nothing was inserted.
/// Every record is validated (and every password hashed) before the first
/// insert; if an insert still fails, the records already written are removed
/// again so the next start sees an empty store.
pub async fn apply_seed(
    store: Arc<dyn RecordStore>,
    seed: SeedData,
    bcrypt_cost: u32,
) -> Result<Option<SeedSummary>, SeedError> {
    if !store.is_empty().await? {
        tracing::info!("Store already has records, skipping seed");
        return Ok(None);
    }

    let prepared = PreparedSeed::new(seed, bcrypt_cost)?;
    let mut inserted = Vec::new();

    match prepared.insert(store.as_ref(), &mut inserted).await {
        Ok(summary) => {
            tracing::info!(
                "Seeded {} users, {} lists, {} cards",
                summary.users,
                summary.lists,
                summary.cards
            );
            Ok(Some(summary))
        }
        Err(e) => {
            tracing::error!("Seeding failed after {} records, rolling back", inserted.len());
            for (collection, id) in inserted.into_iter().rev() {
                if let Err(cleanup) = store.remove_by_id(collection, &id).await {
                    tracing::warn!("Failed to remove seeded {} record {}: {}", collection, id, cleanup);
                }
            }
            Err(e.into())
        }
    }
}

/// Seed records converted to field maps, ready to insert
struct PreparedSeed {
    users: Vec<Fields>,
    /// List fields paired with the id the seed file gave the list
    lists: Vec<(Fields, Option<String>)>,
    cards: Vec<Fields>,
}

impl PreparedSeed {
    fn new(seed: SeedData, bcrypt_cost: u32) -> Result<Self, SeedError> {
        let users = seed
            .users
            .into_iter()
            .map(|value| Ok(prepare_user_fields(into_fields(value)?, bcrypt_cost)?))
            .collect::<Result<Vec<_>, SeedError>>()?;

        let lists = seed
            .lists
            .into_iter()
            .map(|value| {
                let fields = into_fields(value)?;
                let original = fields.get("id").map(id_key);
                Ok((fields, original))
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        let cards = seed
            .cards
            .into_iter()
            .map(into_fields)
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Self { users, lists, cards })
    }

    /// Insert everything, recording each written record in `inserted`
    async fn insert(
        self,
        store: &dyn RecordStore,
        inserted: &mut Vec<(CollectionKind, RecordId)>,
    ) -> Result<SeedSummary, StoreError> {
        let mut summary = SeedSummary::default();

        for fields in self.users {
            let user = store.insert(CollectionKind::Users, fields).await?;
            inserted.push((CollectionKind::Users, user.id));
            summary.users += 1;
        }

        let mut list_ids: HashMap<String, String> = HashMap::new();
        for (fields, original) in self.lists {
            let list = store.insert(CollectionKind::Lists, fields).await?;
            if let Some(original) = original {
                list_ids.insert(original, list.id.clone());
            }
            inserted.push((CollectionKind::Lists, list.id));
            summary.lists += 1;
        }

        for mut fields in self.cards {
            if let Some(list_id) = fields.get_mut("list_id") {
                if let Some(new_id) = list_ids.get(&id_key(list_id)) {
                    *list_id = Value::String(new_id.clone());
                }
            }
            let card = store.insert(CollectionKind::Cards, fields).await?;
            inserted.push((CollectionKind::Cards, card.id));
            summary.cards += 1;
        }

        Ok(summary)
    }
}

/// Seed ids may be numbers or strings; both map through their text form
fn id_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
