/**
 * User Account Handlers
 *
 * Registration and listing are open to anyone. Updating and removing act on
 * the caller's own record only, so they need an identity. None of these
 * publish change events, and no response ever contains a password.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;

use crate::backend::auth::users::prepare_user_fields;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::into_fields;
use crate::shared::PublicUser;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, BackendError> {
    let users = state.users().list().await?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}

/// POST /users
///
/// Usernames are not checked for uniqueness.
pub async fn register_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<PublicUser>, BackendError> {
    let fields = prepare_user_fields(into_fields(body)?, state.config.bcrypt_cost)?;
    let user = state.users().insert(fields).await?;
    tracing::info!("Registered user {} ({:?})", user.id, user.username);

    Ok(Json(user.into()))
}

/// PUT /users
pub async fn update_self(
    State(state): State<AppState>,
    AuthUser(current): AuthUser,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<PublicUser>, BackendError> {
    let patch = prepare_user_fields(into_fields(body)?, state.config.bcrypt_cost)?;
    let user = state.users().update_by_id(&current.id, patch).await?;
    tracing::info!("Updated user {}", user.id);

    Ok(Json(user.into()))
}

/// DELETE /users
pub async fn remove_self(
    State(state): State<AppState>,
    AuthUser(current): AuthUser,
) -> Result<StatusCode, BackendError> {
    state.users().remove_by_id(&current.id).await?;
    tracing::info!("Removed user {}", current.id);

    Ok(StatusCode::OK)
}
