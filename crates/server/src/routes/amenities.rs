use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use models::{Amenity, AmenityUpdate, NewAmenity};
use service::amenity_service;

use crate::errors::ApiError;
use crate::routes::{parse_id, parse_payload, require_field, require_object, ServerState};

#[utoipa::path(
    get, path = "/api/v1/amenities", tag = "amenities",
    responses((status = 200, description = "List OK"))
)]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Amenity>> {
    Json(amenity_service::list_amenities(&state.store).await)
}

#[utoipa::path(
    get, path = "/api/v1/amenities/{amenity_id}", tag = "amenities",
    params(("amenity_id" = String, Path, description = "Amenity ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(amenity_id): Path<String>,
) -> Result<Json<Amenity>, ApiError> {
    let id = parse_id(&amenity_id)?;
    amenity_service::get_amenity(&state.store, id)
        .await
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

#[utoipa::path(
    post, path = "/api/v1/amenities", tag = "amenities",
    request_body = crate::openapi::NewAmenityDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Bad Request"))
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Amenity>), ApiError> {
    let payload = require_object(body)?;
    require_field(&payload, "name")?;
    let input: NewAmenity = parse_payload(payload)?;
    let created = amenity_service::create_amenity(&state.store, input).await?;
    info!(id = %created.id, name = %created.name, "created amenity");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/v1/amenities/{amenity_id}", tag = "amenities",
    params(("amenity_id" = String, Path, description = "Amenity ID")),
    request_body = crate::openapi::AmenityUpdateDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(amenity_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Amenity>, ApiError> {
    let id = parse_id(&amenity_id)?;
    if amenity_service::get_amenity(&state.store, id).await.is_none() {
        return Err(ApiError::not_found());
    }
    let payload = require_object(body)?;
    let patch: AmenityUpdate = parse_payload(payload)?;
    let updated = amenity_service::update_amenity(&state.store, id, patch).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/amenities/{amenity_id}", tag = "amenities",
    params(("amenity_id" = String, Path, description = "Amenity ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(amenity_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&amenity_id)?;
    if !amenity_service::delete_amenity(&state.store, id).await? {
        return Err(ApiError::not_found());
    }
    info!(%id, "deleted amenity");
    Ok(Json(serde_json::json!({})))
}
