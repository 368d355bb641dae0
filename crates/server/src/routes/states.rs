use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use models::{state::State as StateModel, NewState, StateUpdate};
use service::state_service;

use crate::errors::ApiError;
use crate::routes::{parse_id, parse_payload, require_field, require_object, ServerState};

#[utoipa::path(
    get, path = "/api/v1/states", tag = "states",
    responses((status = 200, description = "List OK"))
)]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<StateModel>> {
    Json(state_service::list_states(&state.store).await)
}

#[utoipa::path(
    get, path = "/api/v1/states/{state_id}", tag = "states",
    params(("state_id" = String, Path, description = "State ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(state_id): Path<String>,
) -> Result<Json<StateModel>, ApiError> {
    let id = parse_id(&state_id)?;
    state_service::get_state(&state.store, id)
        .await
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

#[utoipa::path(
    post, path = "/api/v1/states", tag = "states",
    request_body = crate::openapi::NewStateDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Bad Request"))
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<StateModel>), ApiError> {
    let payload = require_object(body)?;
    require_field(&payload, "name")?;
    let input: NewState = parse_payload(payload)?;
    let created = state_service::create_state(&state.store, input).await?;
    info!(id = %created.id, name = %created.name, "created state");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/v1/states/{state_id}", tag = "states",
    params(("state_id" = String, Path, description = "State ID")),
    request_body = crate::openapi::StateUpdateDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(state_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<StateModel>, ApiError> {
    let id = parse_id(&state_id)?;
    if state_service::get_state(&state.store, id).await.is_none() {
        return Err(ApiError::not_found());
    }
    let payload = require_object(body)?;
    let patch: StateUpdate = parse_payload(payload)?;
    let updated = state_service::update_state(&state.store, id, patch).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/states/{state_id}", tag = "states",
    params(("state_id" = String, Path, description = "State ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(state_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&state_id)?;
    if !state_service::delete_state(&state.store, id).await? {
        return Err(ApiError::not_found());
    }
    info!(%id, "deleted state");
    Ok(Json(serde_json::json!({})))
}
