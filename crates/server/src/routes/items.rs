use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use serde::Serialize;
use service::records::{Record, RecordId};
use tracing::debug;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct CreatedItem {
    pub id: RecordId,
    pub item: Record,
}

/// All items as an object keyed by id.
pub async fn list_items(State(state): State<ServerState>) -> Json<BTreeMap<RecordId, Record>> {
    let items = state.store.items.list().await;
    debug!(count = items.len(), "list items");
    Json(items)
}

pub async fn get_item(
    State(state): State<ServerState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Record>, ApiError> {
    Ok(Json(state.store.items.get(id).await?))
}

pub async fn create_item(
    State(state): State<ServerState>,
    Json(body): Json<Record>,
) -> (StatusCode, Json<CreatedItem>) {
    debug!(?body, "create item");
    let (id, item) = state.store.items.create(body).await;
    (StatusCode::CREATED, Json(CreatedItem { id, item }))
}

/// Shallow merge of the body into the stored item.
pub async fn update_item(
    State(state): State<ServerState>,
    Path(id): Path<RecordId>,
    Json(body): Json<Record>,
) -> Result<Json<Record>, ApiError> {
    debug!(id, ?body, "update item");
    Ok(Json(state.store.items.merge(id, body).await?))
}

pub async fn delete_item(
    State(state): State<ServerState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Message>, ApiError> {
    state.store.items.delete(id).await?;
    Ok(Json(Message::new("Item deleted")))
}
