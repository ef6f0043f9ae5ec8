//! Authentication Module
//!
//! User registration, credentials and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - Password hashing and credential lookup
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for the user and token endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Password hashing and credential lookup
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: POST /users with username and password → stored with a bcrypt hash
//! 2. **Token**: POST /token with username and password → signed JWT returned
//! 3. **Use**: send the token as `x-access-token` → identity attached to the request
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Tokens are stateless and expire after the configured lifetime
//! - Bad credentials and bad tokens both return 403

/// Password hashing and credential lookup
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for user and token endpoints
pub mod handlers;

pub use handlers::{get_me, issue_token, list_users, register_user, remove_self, update_self};
pub use sessions::{Claims, TokenKeys};
