use axum::{extract::State, Json};
use serde::Serialize;
use service::records::Record;
use tracing::debug;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct NameBody {
    #[serde(rename = "Name")]
    pub name: String,
}

pub async fn get_name(State(state): State<ServerState>) -> Json<NameBody> {
    Json(NameBody { name: state.store.name.get().await })
}

/// Replace the process-wide name with the body's `Name` and echo it back.
pub async fn change_name(
    State(state): State<ServerState>,
    Json(body): Json<Record>,
) -> Result<Json<NameBody>, ApiError> {
    debug!(?body, "change name");
    let name = state.store.name.apply_patch(&body).await?;
    Ok(Json(NameBody { name }))
}
