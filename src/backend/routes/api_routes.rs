/**
 * API Route Handlers
 *
 * Every endpoint of the board API, relative to the configured prefix.
 *
 * # Routes
 *
 * ## Board
 * - `GET/POST /lists`, `GET/PUT/DELETE /lists/{id}`
 * - `GET/POST /cards`, `GET/PUT/DELETE /cards/{id}`
 *
 * ## Users
 * - `GET /users` - List users
 * - `POST /users` - Register
 * - `PUT /users` - Update own record (identity required)
 * - `DELETE /users` - Remove own record (identity required)
 * - `POST /token` - Exchange credentials for a token
 * - `GET /me` - Current identity or `null`
 *
 * ## Real-time
 * - `GET /events` - SSE stream of change events
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, issue_token, list_users, register_user, remove_self, update_self};
use crate::backend::board::{create_record, get_record, list_records, remove_record, update_record};
use crate::backend::board::BoardResource;
use crate::backend::realtime::handle_event_subscription;
use crate::backend::server::state::AppState;
use crate::shared::{BoardList, Card};

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    let router = board_routes::<BoardList>(router, "/lists");
    let router = board_routes::<Card>(router, "/cards");

    router
        .route(
            "/users",
            get(list_users)
                .post(register_user)
                .put(update_self)
                .delete(remove_self),
        )
        .route("/token", post(issue_token))
        .route("/me", get(get_me))
        .route("/events", get(handle_event_subscription))
}

/// Collection and item routes for one board resource
fn board_routes<R: BoardResource>(router: Router<AppState>, path: &str) -> Router<AppState> {
    router
        .route(path, get(list_records::<R>).post(create_record::<R>))
        .route(
            &format!("{}/{{id}}", path),
            get(get_record::<R>)
                .put(update_record::<R>)
                .delete(remove_record::<R>),
        )
}
