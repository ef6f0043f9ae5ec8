//! Route Configuration Module
//!
//! HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation and middleware stack
//! - **`api_routes`** - Board, user, token and event endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint table
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use boardcast::backend::routes::create_router;
//! use boardcast::backend::server::{config::AppConfig, AppState};
//! use boardcast::backend::store::MemoryStore;
//! use std::sync::Arc;
//!
//! let state = AppState::new(AppConfig::default(), Arc::new(MemoryStore::new()));
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// API endpoint table
pub mod api_routes;

pub use router::create_router;
