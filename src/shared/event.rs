/**
 * Change Events
 *
 * A change event describes one committed list or card mutation. The server
 * publishes it to every live subscriber after the store write succeeds.
 *
 * # Wire Format
 *
 * Events are `{type, payload}` objects. The payload shape is fixed per type
 * and clients depend on it structurally:
 *
 * ```json
 * {"type": "[LISTS] CREATE", "payload": {"list": {"id": "1", "name": "Backlog"}}}
 * {"type": "[CARDS] UPDATE", "payload": {"id": "5", "updates": {"title": "Fix bug"}}}
 * {"type": "[CARDS] REMOVE", "payload": "5"}
 * ```
 */
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::shared::model::{BoardList, Card, Fields, RecordId};

/// One committed mutation, as pushed to subscribers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ChangeEvent {
    #[serde(rename = "[LISTS] CREATE")]
    ListCreated { list: BoardList },

    #[serde(rename = "[LISTS] UPDATE")]
    ListUpdated { id: RecordId, updates: Fields },

    #[serde(rename = "[LISTS] REMOVE")]
    ListRemoved(RecordId),

    /// `listId` repeats the card's `list_id` so clients can route the card
    /// without looking inside it.
    #[serde(rename = "[CARDS] CREATE")]
    CardCreated {
        card: Card,
        #[serde(rename = "listId", default, skip_serializing_if = "Option::is_none")]
        list_id: Option<Value>,
    },

    #[serde(rename = "[CARDS] UPDATE")]
    CardUpdated { id: RecordId, updates: Fields },

    #[serde(rename = "[CARDS] REMOVE")]
    CardRemoved(RecordId),
}

/// Event type without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    ListsCreate,
    ListsUpdate,
    ListsRemove,
    CardsCreate,
    CardsUpdate,
    CardsRemove,
}

impl ChangeKind {
    /// The `type` string used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListsCreate => "[LISTS] CREATE",
            Self::ListsUpdate => "[LISTS] UPDATE",
            Self::ListsRemove => "[LISTS] REMOVE",
            Self::CardsCreate => "[CARDS] CREATE",
            Self::CardsUpdate => "[CARDS] UPDATE",
            Self::CardsRemove => "[CARDS] REMOVE",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ChangeEvent {
    /// Create a list-created event
    pub fn list_created(list: BoardList) -> Self {
        Self::ListCreated { list }
    }

    /// Create a card-created event, surfacing the card's `list_id`
    pub fn card_created(card: Card) -> Self {
        let list_id = card.list_id().cloned();
        Self::CardCreated { card, list_id }
    }

    pub fn kind(&self) -> ChangeKind {
        match self {
            Self::ListCreated { .. } => ChangeKind::ListsCreate,
            Self::ListUpdated { .. } => ChangeKind::ListsUpdate,
            Self::ListRemoved(_) => ChangeKind::ListsRemove,
            Self::CardCreated { .. } => ChangeKind::CardsCreate,
            Self::CardUpdated { .. } => ChangeKind::CardsUpdate,
            Self::CardRemoved(_) => ChangeKind::CardsRemove,
        }
    }
}
