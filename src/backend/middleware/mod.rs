//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Identity middleware and the extractors that read its result
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use boardcast::backend::middleware::identity_guard;
//! use boardcast::backend::server::AppState;
//!
//! fn guarded(router: Router<AppState>, state: AppState) -> Router<AppState> {
//!     router.layer(middleware::from_fn_with_state(state, identity_guard))
//! }
//! ```

pub mod auth;

pub use auth::{identity_guard, AuthUser, CurrentUser, MaybeUser};
