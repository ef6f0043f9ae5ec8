//! Shared Module
//!
//! Types that are shared between the server and its clients. Everything in
//! here is serializable and describes data exactly as it travels over HTTP
//! and the event stream.

/// Board records: lists, cards and users
pub mod model;

/// Change events broadcast to subscribers
pub mod event;

/// Re-export commonly used types for convenience
pub use model::{BoardList, Card, Fields, PublicUser, Record, RecordId, User};
pub use event::{ChangeEvent, ChangeKind};
