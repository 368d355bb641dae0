use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use models::{NewPlace, Place, PlaceUpdate};
use service::{city_service, place_service, user_service};

use crate::errors::ApiError;
use crate::routes::{parse_id, parse_payload, require_field, require_object, ServerState};

#[utoipa::path(
    get, path = "/api/v1/cities/{city_id}/places", tag = "places",
    params(("city_id" = String, Path, description = "Parent city ID")),
    responses((status = 200, description = "List OK"), (status = 404, description = "Not Found"))
)]
pub async fn list_by_city(
    State(state): State<ServerState>,
    Path(city_id): Path<String>,
) -> Result<Json<Vec<Place>>, ApiError> {
    let id = parse_id(&city_id)?;
    let places = place_service::list_places_of_city(&state.store, id).await?;
    Ok(Json(places))
}

#[utoipa::path(
    get, path = "/api/v1/places/{place_id}", tag = "places",
    params(("place_id" = String, Path, description = "Place ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(place_id): Path<String>,
) -> Result<Json<Place>, ApiError> {
    let id = parse_id(&place_id)?;
    place_service::get_place(&state.store, id)
        .await
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

/// Validation order mirrors the resource-lifecycle contract: parent city,
/// then body shape, then `user_id` presence, then the referenced user,
/// then `name` presence.
#[utoipa::path(
    post, path = "/api/v1/cities/{city_id}/places", tag = "places",
    params(("city_id" = String, Path, description = "Parent city ID")),
    request_body = crate::openapi::NewPlaceDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Path(city_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Place>), ApiError> {
    let city_id = parse_id(&city_id)?;
    if city_service::get_city(&state.store, city_id).await.is_none() {
        return Err(ApiError::not_found());
    }
    let payload = require_object(body)?;
    require_field(&payload, "user_id")?;
    let user_id = payload
        .get("user_id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(ApiError::not_found)?;
    if user_service::get_user(&state.store, user_id).await.is_none() {
        return Err(ApiError::not_found());
    }
    require_field(&payload, "name")?;
    let input: NewPlace = parse_payload(payload)?;
    let created = place_service::create_place(&state.store, city_id, input).await?;
    info!(id = %created.id, city_id = %city_id, user_id = %user_id, "created place");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/v1/places/{place_id}", tag = "places",
    params(("place_id" = String, Path, description = "Place ID")),
    request_body = crate::openapi::PlaceUpdateDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(place_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Place>, ApiError> {
    let id = parse_id(&place_id)?;
    if place_service::get_place(&state.store, id).await.is_none() {
        return Err(ApiError::not_found());
    }
    let payload = require_object(body)?;
    let patch: PlaceUpdate = parse_payload(payload)?;
    let updated = place_service::update_place(&state.store, id, patch).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/places/{place_id}", tag = "places",
    params(("place_id" = String, Path, description = "Place ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(place_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&place_id)?;
    if !place_service::delete_place(&state.store, id).await? {
        return Err(ApiError::not_found());
    }
    info!(%id, "deleted place");
    Ok(Json(serde_json::json!({})))
}
