//! Backend Module
//!
//! All server-side code for boardcast: an Axum HTTP server that stores
//! lists, cards and users, verifies tokens, and pushes every list and card
//! change to connected clients.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, startup
//! - **`routes`** - Route table and middleware stack
//! - **`store`** - Record store trait with SQLite and in-memory implementations
//! - **`board`** - List and card handlers
//! - **`auth`** - Users, passwords, tokens
//! - **`middleware`** - Identity middleware and extractors
//! - **`realtime`** - Change broadcasting and the SSE endpoint
//! - **`extract`** - JSON body extractor
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── store/          - Record store
//! ├── board/          - List and card handlers
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── realtime/       - Event broadcasting
//! ├── extract.rs      - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Concurrency
//!
//! Handlers run concurrently on the tokio runtime. The store serializes
//! writes per collection; the broadcast channel is the only other shared
//! resource and never blocks a publisher.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Record store
pub mod store;

/// List and card handlers
pub mod board;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Real-time update system
pub mod realtime;

/// Request extractors
pub mod extract;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use realtime::ChangeBroadcast;
pub use server::{create_app, AppConfig, AppState};
pub use store::{MemoryStore, RecordStore, SqliteStore};
