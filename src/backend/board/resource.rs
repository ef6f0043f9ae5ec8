/**
 * Board Resources
 *
 * Lists and cards follow the same create/read/update/remove protocol and
 * differ only in where they are stored and which events they produce.
 * `BoardResource` captures that difference so the handlers can be written
 * once.
 */

use crate::backend::store::Entity;
use crate::shared::{BoardList, Card, ChangeEvent, Fields, RecordId};

/// A record type served by the generic board handlers
pub trait BoardResource: Entity + Clone {
    /// Singular name used in logs
    const NAME: &'static str;

    fn id(&self) -> &str;

    fn created_event(self) -> ChangeEvent;

    fn updated_event(id: RecordId, updates: Fields) -> ChangeEvent;

    fn removed_event(id: RecordId) -> ChangeEvent;
}

impl BoardResource for BoardList {
    const NAME: &'static str = "list";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_event(self) -> ChangeEvent {
        ChangeEvent::list_created(self)
    }

    fn updated_event(id: RecordId, updates: Fields) -> ChangeEvent {
        ChangeEvent::ListUpdated { id, updates }
    }

    fn removed_event(id: RecordId) -> ChangeEvent {
        ChangeEvent::ListRemoved(id)
    }
}

impl BoardResource for Card {
    const NAME: &'static str = "card";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_event(self) -> ChangeEvent {
        ChangeEvent::card_created(self)
    }

    fn updated_event(id: RecordId, updates: Fields) -> ChangeEvent {
        ChangeEvent::CardUpdated { id, updates }
    }

    fn removed_event(id: RecordId) -> ChangeEvent {
        ChangeEvent::CardRemoved(id)
    }
}
