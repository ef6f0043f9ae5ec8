/**
 * Authentication Request and Response Types
 */

use serde::{Deserialize, Serialize};

/// Token request
///
/// Missing fields read as empty strings, which never match a stored user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Token response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT for the `x-access-token` header
    pub token: String,
}
