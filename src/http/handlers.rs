use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::item::{Item, ItemInput};
use crate::registry::Registry;

use super::error::ApiError;

pub(super) const WELCOME: &str = "Welcome to the Item Registry API!";

/// `GET /`
pub(super) async fn root() -> impl IntoResponse {
    Json(json!({ "message": WELCOME }))
}

/// `GET /health` - returns `{ "ok": true, "items": <count> }`.
pub(super) async fn health<R: Registry + 'static>(
    State(registry): State<Arc<R>>,
) -> Result<Json<Value>, ApiError> {
    let count = registry.len()?;
    Ok(Json(json!({ "ok": true, "items": count })))
}

/// `GET /items`
pub(super) async fn list_items<R: Registry + 'static>(
    State(registry): State<Arc<R>>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = registry.list()?;
    tracing::debug!(count = items.len(), "listed items");
    Ok(Json(items))
}

/// `POST /items`
pub(super) async fn create_item<R: Registry + 'static>(
    State(registry): State<Arc<R>>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(input) = payload?;
    let item = registry.create(input.validate()?)?;
    tracing::info!(item_id = item.id(), "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /items/:item_id`
pub(super) async fn get_item<R: Registry + 'static>(
    State(registry): State<Arc<R>>,
    item_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = item_id?;
    Ok(Json(registry.get(id)?))
}

/// `PUT /items/:item_id` - the path id picks the slot, the body is stored as given.
pub(super) async fn update_item<R: Registry + 'static>(
    State(registry): State<Arc<R>>,
    item_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = item_id?;
    let Json(input) = payload?;
    let item = registry.update(id, input.validate()?)?;
    if item.id() != id {
        tracing::warn!(path_id = id, body_id = item.id(), "item replaced under a different id");
    }
    tracing::info!(item_id = id, "item updated");
    Ok(Json(item))
}

/// `DELETE /items/:item_id`
pub(super) async fn delete_item<R: Registry + 'static>(
    State(registry): State<Arc<R>>,
    item_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = item_id?;
    registry.delete(id)?;
    tracing::info!(item_id = id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}
