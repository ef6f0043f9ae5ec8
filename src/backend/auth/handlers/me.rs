/**
 * Current User Handler
 *
 * GET /me returns the identity attached by the identity middleware, or
 * `null` for an anonymous request.
 */

use axum::response::Json;

use crate::backend::middleware::auth::MaybeUser;
use crate::shared::PublicUser;

/// Get current user handler
pub async fn get_me(MaybeUser(user): MaybeUser) -> Json<Option<PublicUser>> {
    Json(user)
}
