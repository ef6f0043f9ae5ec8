/**
 * Server Initialization
 *
 * Builds the application state from configuration and wires it into the
 * router.
 *
 * # Initialization Process
 *
 * 1. Open the record store (SQLite or in-memory)
 * 2. Apply the seed file if one is configured and the store is empty
 * 3. Create the broadcast channel and token keys
 * 4. Create and configure the router
 *
 * `serve` runs the router until a shutdown signal fires, closing the
 * change broadcast first so open event streams let the server drain.
 */

use axum::Router;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, AppConfig};
use crate::backend::server::seed::{apply_seed, SeedData, SeedError};
use crate::backend::server::state::AppState;
use crate::backend::store::{RecordStore, StoreError};

/// Startup errors
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to open record store: {0}")]
    Store(#[from] StoreError),
    #[error("failed to seed record store: {0}")]
    Seed(#[from] SeedError),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the configured database cannot be opened or migrated, or if the
/// seed file is unreadable or invalid.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, StartupError> {
    let state = build_state(config).await?;
    Ok(create_app_with_state(state))
}

/// Build the application state from configuration
pub async fn build_state(config: AppConfig) -> Result<AppState, StartupError> {
    tracing::info!("Initializing boardcast server");

    let store = load_store(&config).await?;
    seed_store(&config, store.clone()).await?;

    let state = AppState::new(config, store);
    tracing::info!(
        "Broadcast channel ready (capacity {})",
        state.config.broadcast_capacity
    );
    Ok(state)
}

/// Create the router for existing state
pub fn create_app_with_state(state: AppState) -> Router<()> {
    let app = create_router(state);
    tracing::info!("Router configured");
    app
}

/// Serve the application until `signal` completes
///
/// Open `/events` streams are ended when the signal fires; other in-flight
/// requests are allowed to finish.
pub async fn serve<F>(listener: TcpListener, state: AppState, signal: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let broadcast = state.broadcast.clone();
    let app = create_app_with_state(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            broadcast.close();
        })
        .await
}

async fn seed_store(config: &AppConfig, store: Arc<dyn RecordStore>) -> Result<(), SeedError> {
    let Some(path) = &config.seed_file else {
        return Ok(());
    };

    tracing::info!("Loading seed file {:?}", path);
    let seed = SeedData::from_file(path).await?;
    apply_seed(store, seed, config.bcrypt_cost).await?;
    Ok(())
}
