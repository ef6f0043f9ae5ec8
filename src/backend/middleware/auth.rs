/**
 * Identity Middleware
 *
 * Runs in front of every route. When a request carries a credential the
 * middleware verifies it, loads the user it names and attaches that user to
 * the request extensions. Requests without a credential pass through
 * untouched; whether an identity is required is up to the handler, which
 * asks for it with the `AuthUser` extractor.
 *
 * # Credential Sources
 *
 * Checked in order, first non-empty one wins:
 * 1. `x-access-token: <token>`
 * 2. `Authorization: Bearer <token>`
 *
 * A credential that is present but fails verification ends the request with
 * 403, even on routes that do not need an identity.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::PublicUser;

/// Header carrying the bare token
pub const TOKEN_HEADER: &str = "x-access-token";

/// The verified identity attached to a request
#[derive(Clone, Debug)]
pub struct CurrentUser(pub PublicUser);

/// Identity middleware
///
/// 1. Reads the token from `x-access-token` or `Authorization: Bearer`
/// 2. Verifies signature and expiry
/// 3. Loads the user named by the token
/// 4. Inserts `CurrentUser` into the request extensions
///
/// Returns 403 Forbidden if a supplied token is invalid or its user no
/// longer exists.
pub async fn identity_guard(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let Some(token) = extract_token(request.headers())? else {
        return Ok(next.run(request).await);
    };

    let claims = app_state
        .tokens
        .verify_token(&token)
        .inspect_err(|e| tracing::warn!("Invalid token: {:?}", e))?;

    let user = app_state
        .users()
        .get_by_id(&claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token names unknown user: {}", claims.sub);
            BackendError::forbidden("Invalid token")
        })?;

    request.extensions_mut().insert(CurrentUser(user.into()));

    Ok(next.run(request).await)
}

/// Pull the raw token out of the request headers
///
/// `Ok(None)` when no credential header is present, or every one present is
/// blank.
pub fn extract_token(headers: &HeaderMap) -> Result<Option<String>, BackendError> {
    if let Some(value) = headers.get(TOKEN_HEADER) {
        let token = value.to_str().map_err(|_| {
            tracing::warn!("Unreadable {} header", TOKEN_HEADER);
            BackendError::forbidden("Invalid token")
        })?;
        let token = token.trim();
        if !token.is_empty() {
            return Ok(Some(token.to_string()));
        }
    }

    if let Some(value) = headers.get(AUTHORIZATION) {
        let token = value
            .to_str()
            .ok()
            .and_then(|header| header.strip_prefix("Bearer "))
            .ok_or_else(|| {
                tracing::warn!("Invalid Authorization header format");
                BackendError::forbidden("Invalid token")
            })?;
        let token = token.trim();
        if !token.is_empty() {
            return Ok(Some(token.to_string()));
        }
    }

    Ok(None)
}

/// Axum extractor for a required identity
///
/// Rejects with 403 when the request carries no verified identity.
#[derive(Clone, Debug)]
pub struct AuthUser(pub PublicUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::debug!("No identity on request to {}", parts.uri.path());
                BackendError::forbidden("Authentication required")
            })?;

        Ok(AuthUser(user))
    }
}

/// Axum extractor for an optional identity
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<PublicUser>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(
            parts.extensions.get::<CurrentUser>().map(|c| c.0.clone()),
        ))
    }
}
