//! Authentication Handlers Module
//!
//! HTTP handlers for the user and token endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── account.rs  - User registration, listing, self update and removal
//! ├── token.rs    - Credential exchange
//! └── me.rs       - Current user
//! ```
//!
//! # Handlers
//!
//! - **`list_users`** - GET /users
//! - **`register_user`** - POST /users
//! - **`update_self`** - PUT /users (identity required)
//! - **`remove_self`** - DELETE /users (identity required)
//! - **`issue_token`** - POST /token
//! - **`get_me`** - GET /me
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::{get, post}, Router};
//! use boardcast::backend::auth::handlers::{get_me, issue_token};
//! use boardcast::backend::server::AppState;
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/token", post(issue_token))
//!     .route("/me", get(get_me));
//! ```

/// Request and response types
pub mod types;

/// User account handlers
pub mod account;

/// Token handler
pub mod token;

/// Get current user handler
pub mod me;

pub use types::{TokenRequest, TokenResponse};

pub use account::{list_users, register_user, remove_self, update_self};
pub use me::get_me;
pub use token::issue_token;
