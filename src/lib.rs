//! Boardcast - Main Library
//!
//! Boardcast is the backend for a Kanban-style board application. It persists
//! boards made of lists and cards, authenticates users with signed tokens, and
//! pushes every list/card mutation to all connected clients as it happens.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that cross the wire
//!   - Board records (lists, cards, users)
//!   - Change events pushed to subscribers
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and routing
//!   - Record store (SQLite or in-memory)
//!   - Identity guard, token issuing, password hashing
//!   - Change broadcasting over Server-Sent Events
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary.
//!   Without it only the `shared` wire types are compiled, which is what a
//!   client crate needs.
//!
//! # Usage
//!
//! ```rust,no_run
//! use boardcast::backend::server::{config::AppConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Mutation Flow
//!
//! 1. The identity guard resolves the request credential (or lets it through anonymously)
//! 2. A handler applies the write to the record store
//! 3. On success the handler publishes a change event
//! 4. Every live `/events` subscriber receives the event
//! 5. The REST response is returned without waiting for delivery

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
