/**
 * User Records and Credentials
 *
 * Password handling for the `users` collection. Passwords arrive in
 * plaintext, are stored as bcrypt hashes and never leave the server.
 */

use serde_json::Value;

use crate::backend::error::BackendError;
use crate::backend::store::Collection;
use crate::shared::model::{Fields, User};

/// Hash a password with bcrypt
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Prepare user fields for storage
///
/// Replaces a plaintext `password` with its hash. `username` and `password`
/// must be strings or `null` when present; `null` clears the field, and a
/// user without a password can no longer obtain a token. Other types are
/// refused so that stored users always deserialize.
pub fn prepare_user_fields(mut fields: Fields, cost: u32) -> Result<Fields, BackendError> {
    if let Some(username) = fields.get("username") {
        if !(username.is_string() || username.is_null()) {
            return Err(BackendError::internal("username must be a string"));
        }
    }

    match fields.remove("password") {
        Some(Value::String(password)) => {
            let hash = hash_password(&password, cost)?;
            fields.insert("password".to_string(), Value::String(hash));
        }
        Some(Value::Null) => {
            fields.insert("password".to_string(), Value::Null);
        }
        Some(_) => return Err(BackendError::internal("password must be a string")),
        None => {}
    }

    Ok(fields)
}

/// Find the first user whose username matches and whose password verifies
///
/// Returns `None` both for an unknown username and a wrong password.
pub async fn find_by_credentials(
    users: &Collection<User>,
    username: &str,
    password: &str,
) -> Result<Option<User>, BackendError> {
    let candidates = users
        .list()
        .await?
        .into_iter()
        .filter(|user| user.username.as_deref() == Some(username));

    for user in candidates {
        let Some(hash) = user.password.as_deref() else {
            continue;
        };
        match bcrypt::verify(password, hash) {
            Ok(true) => return Ok(Some(user)),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("Stored password for user {} is not a valid hash: {}", user.id, e);
            }
        }
    }

    Ok(None)
}
