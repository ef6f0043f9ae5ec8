/**
 * Board Records
 *
 * Lists, cards and users are free-form JSON objects with a store-assigned
 * `id`. Only the fields the server itself reads are typed; everything else
 * the client sends rides along in a flattened field map and comes back
 * untouched.
 *
 * # Wire Format
 *
 * ```json
 * { "id": "0c6f...", "name": "Backlog", "position": 2 }
 * ```
 */
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Store-assigned record identifier
pub type RecordId = String;

/// Untyped record fields (everything except `id`)
pub type Fields = Map<String, Value>;

/// Untyped stored record
///
/// This is the shape the record store works with. Typed entities convert to
/// and from it through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier assigned on insert, immutable afterwards
    pub id: RecordId,
    /// Remaining fields
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Build a record, dropping any `id` key from the field map so the
    /// flattened form never carries two ids.
    pub fn new(id: impl Into<RecordId>, mut fields: Fields) -> Self {
        fields.remove("id");
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Shallow merge: every key in `patch` overwrites, other keys are kept.
    /// An `id` key in the patch is ignored.
    pub fn merge(&mut self, patch: &Fields) {
        for (key, value) in patch {
            if key == "id" {
                continue;
            }
            self.fields.insert(key.clone(), value.clone());
        }
    }
}

/// A column on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Fields,
}

/// A card inside a list
///
/// `list_id` is a soft reference; nothing checks that the list exists. It
/// stays in the field map so an explicit `null` survives a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Card {
    /// The owning list reference, if the card carries one (possibly `null`)
    pub fn list_id(&self) -> Option<&Value> {
        self.fields.get("list_id")
    }
}

/// A stored user, including the password hash
///
/// Never serialize this into a response; convert to [`PublicUser`] first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// bcrypt hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Profile fields
    #[serde(flatten)]
    pub profile: Fields,
}

/// A user as seen by clients (password stripped)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(flatten)]
    pub profile: Fields,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            profile: user.profile,
        }
    }
}
