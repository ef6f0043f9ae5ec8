//! Board Module
//!
//! Lists and cards: the records every connected client watches.
//!
//! # Module Structure
//!
//! ```text
//! board/
//! ├── mod.rs      - Module exports and documentation
//! ├── resource.rs - BoardResource trait for lists and cards
//! └── handlers.rs - Generic CRUD handlers that publish change events
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use boardcast::backend::board::{create_record, list_records};
//! use boardcast::backend::server::AppState;
//! use boardcast::shared::BoardList;
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/lists", get(list_records::<BoardList>).post(create_record::<BoardList>));
//! ```

/// BoardResource trait
pub mod resource;

/// Generic CRUD handlers
pub mod handlers;

pub use handlers::{create_record, get_record, list_records, remove_record, update_record};
pub use resource::BoardResource;
