use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use models::{NewUser, User, UserUpdate};
use service::user_service;

use crate::errors::ApiError;
use crate::routes::{parse_id, parse_payload, require_field, require_object, ServerState};

#[utoipa::path(
    get, path = "/api/v1/users", tag = "users",
    responses((status = 200, description = "List OK"))
)]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<User>> {
    Json(user_service::list_users(&state.store).await)
}

#[utoipa::path(
    get, path = "/api/v1/users/{user_id}", tag = "users",
    params(("user_id" = String, Path, description = "User ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&user_id)?;
    user_service::get_user(&state.store, id)
        .await
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

#[utoipa::path(
    post, path = "/api/v1/users", tag = "users",
    request_body = crate::openapi::NewUserDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Bad Request"))
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload = require_object(body)?;
    require_field(&payload, "email")?;
    require_field(&payload, "password")?;
    let input: NewUser = parse_payload(payload)?;
    let created = user_service::create_user(&state.store, input).await?;
    info!(id = %created.id, "created user");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/v1/users/{user_id}", tag = "users",
    params(("user_id" = String, Path, description = "User ID")),
    request_body = crate::openapi::UserUpdateDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&user_id)?;
    if user_service::get_user(&state.store, id).await.is_none() {
        return Err(ApiError::not_found());
    }
    let payload = require_object(body)?;
    let patch: UserUpdate = parse_payload(payload)?;
    let updated = user_service::update_user(&state.store, id, patch).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/users/{user_id}", tag = "users",
    params(("user_id" = String, Path, description = "User ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&user_id)?;
    if !user_service::delete_user(&state.store, id).await? {
        return Err(ApiError::not_found());
    }
    info!(%id, "deleted user");
    Ok(Json(serde_json::json!({})))
}
