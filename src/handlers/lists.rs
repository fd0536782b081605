//! List item handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::ListJson;
use crate::model::ListItem;
use crate::response::{created, deleted, updated};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// POST /lists
pub async fn create(
    State(state): State<AppState>,
    ListJson(body): ListJson,
) -> Result<impl IntoResponse, AppError> {
    let item = state.lists.create(&body.list).await?;
    Ok(created(item))
}

/// GET /lists — flat array of `{id, list}`.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ListItem>>, AppError> {
    Ok(Json(state.lists.list().await?))
}

/// GET /lists/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListItem>, AppError> {
    Ok(Json(state.lists.get(&id).await?))
}

/// PUT /lists/:id. A body that fails to decode is reported only after the id is found.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<ListJson, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let item = match body {
        Ok(ListJson(payload)) => state.lists.update_decoded(&id, Ok(payload.list.as_str())).await?,
        Err(err) => state.lists.update_decoded(&id, Err(err)).await?,
    };
    Ok(updated(item))
}

/// DELETE /lists/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.lists.delete(&id).await?;
    Ok(deleted())
}
