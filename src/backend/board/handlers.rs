/**
 * Board Handlers
 *
 * CRUD handlers shared by `/lists` and `/cards`. Every write goes to the
 * store first; only when the store call succeeds is the change event
 * published. The response does not wait for delivery.
 *
 * | Method | Path | Event |
 * |---|---|---|
 * | GET | `/{collection}` | none |
 * | GET | `/{collection}/{id}` | none (missing id returns `null`) |
 * | POST | `/{collection}` | CREATE with the stored record |
 * | PUT | `/{collection}/{id}` | UPDATE with the raw patch |
 * | DELETE | `/{collection}/{id}` | REMOVE with the id |
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use crate::backend::board::resource::BoardResource;
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;
use crate::backend::store::into_fields;
use crate::shared::RecordId;

/// GET /{collection}
pub async fn list_records<R: BoardResource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R>>, BackendError> {
    let records = state.collection::<R>().list().await?;
    Ok(Json(records))
}

/// GET /{collection}/{id}
pub async fn get_record<R: BoardResource>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Option<R>>, BackendError> {
    let record = state.collection::<R>().get_by_id(&id).await?;
    Ok(Json(record))
}

/// POST /{collection}
pub async fn create_record<R: BoardResource>(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<R>, BackendError> {
    let record = state.collection::<R>().insert(into_fields(body)?).await?;
    tracing::info!("Created {} {}", R::NAME, record.id());

    state.broadcast.publish(record.clone().created_event());
    Ok(Json(record))
}

/// PUT /{collection}/{id}
///
/// The published `updates` is the patch exactly as the caller sent it.
pub async fn update_record<R: BoardResource>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<R>, BackendError> {
    let patch = into_fields(body)?;
    let record = state
        .collection::<R>()
        .update_by_id(&id, patch.clone())
        .await?;
    tracing::info!("Updated {} {}", R::NAME, id);

    state.broadcast.publish(R::updated_event(id, patch));
    Ok(Json(record))
}

/// DELETE /{collection}/{id}
pub async fn remove_record<R: BoardResource>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<StatusCode, BackendError> {
    state.collection::<R>().remove_by_id(&id).await?;
    tracing::info!("Removed {} {}", R::NAME, id);

    state.broadcast.publish(R::removed_event(id));
    Ok(StatusCode::OK)
}
