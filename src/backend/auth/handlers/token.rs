/**
 * Token Handler
 *
 * POST /token exchanges a username and password for a signed token.
 *
 * # Process
 *
 * 1. Find the first user whose username matches and whose password hash
 *    verifies
 * 2. Sign a token naming that user
 *
 * Unknown usernames and wrong passwords both return 403 with the same body.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{TokenRequest, TokenResponse};
use crate::backend::auth::users::find_by_credentials;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;

/// Issue token handler
///
/// # Example Request
///
/// ```http
/// POST /api/token HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "wonderland"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
/// ```
pub async fn issue_token(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<TokenRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let user = find_by_credentials(&state.users(), &request.username, &request.password)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Rejected credentials for: {}", request.username);
            BackendError::forbidden("Invalid credentials")
        })?;

    let token = state.tokens.create_token(&user.id).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal("Failed to create token")
    })?;

    tracing::info!(
        "Issued token for user {} (valid {}s)",
        user.id,
        state.tokens.ttl_secs()
    );
    Ok(Json(TokenResponse { token }))
}
