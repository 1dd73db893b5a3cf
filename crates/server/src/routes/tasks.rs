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
pub struct CreatedTask {
    pub id: RecordId,
    pub tasks: Record,
}

pub async fn put_task(
    State(state): State<ServerState>,
    Json(body): Json<Record>,
) -> (StatusCode, Json<CreatedTask>) {
    debug!(?body, "put task");
    let (id, tasks) = state.store.tasks.create(body).await;
    (StatusCode::CREATED, Json(CreatedTask { id, tasks }))
}

pub async fn delete_task(
    State(state): State<ServerState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Message>, ApiError> {
    state.store.tasks.delete(id).await?;
    Ok(Json(Message::new("Task deleted")))
}
