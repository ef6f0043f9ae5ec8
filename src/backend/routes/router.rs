/**
 * Router Configuration
 *
 * Combines the API routes into a single Axum router and wraps them in the
 * middleware stack.
 *
 * # Layers
 *
 * Outermost first:
 * 1. `TraceLayer` - request spans
 * 2. `CorsLayer` - permissive CORS for browser clients
 * 3. `identity_guard` - token verification on every route
 */

use axum::{http::StatusCode, middleware, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::middleware::identity_guard;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// Routes are nested under `api_prefix`; a prefix of `/` mounts them at
/// the root. Unknown paths get a JSON 404 after passing the identity
/// middleware like any other request.
pub fn create_router(app_state: AppState) -> Router<()> {
    let api = configure_api_routes(Router::new());

    let prefix = app_state.config.normalized_prefix();
    let router = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(prefix, api)
    };

    router
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(app_state.clone(), identity_guard))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

async fn fallback() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not Found",
            "status": StatusCode::NOT_FOUND.as_u16(),
        })),
    )
}
