/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds everything a request handler may touch:
 * - the record store behind the typed collections
 * - the change broadcast feeding SSE subscribers
 * - the token signing keys
 * - the loaded configuration
 *
 * Every field is cheap to clone (`Arc` or a channel handle), so Axum can
 * hand a copy to each request.
 *
 * # Example
 *
 * ```rust
 * use boardcast::backend::server::state::AppState;
 * use boardcast::shared::BoardList;
 * use axum::extract::State;
 *
 * async fn count_lists(State(state): State<AppState>) -> usize {
 *     state.collection::<BoardList>().list().await.map(|l| l.len()).unwrap_or(0)
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::realtime::ChangeBroadcast;
use crate::backend::server::config::AppConfig;
use crate::backend::store::{Collection, Entity, RecordStore};
use crate::shared::User;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// Record store shared by every collection
    pub store: Arc<dyn RecordStore>,

    /// Change events for `/events` subscribers
    pub broadcast: ChangeBroadcast,

    /// Token signing and verification keys
    pub tokens: Arc<TokenKeys>,

    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state from a configuration and an opened store
    ///
    /// Creates a fresh broadcast channel sized by `broadcast_capacity` and
    /// derives the token keys from `jwt_secret`.
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            broadcast: ChangeBroadcast::new(config.broadcast_capacity),
            tokens: Arc::new(TokenKeys::from_config(&config)),
            config: Arc::new(config),
        }
    }

    /// Typed view over one collection of the store
    pub fn collection<E: Entity>(&self) -> Collection<E> {
        Collection::new(self.store.clone())
    }

    pub fn users(&self) -> Collection<User> {
        self.collection()
    }
}

impl FromRef<AppState> for ChangeBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.broadcast.clone()
    }
}

impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn RecordStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
