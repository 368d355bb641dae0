use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use models::{City, CityUpdate, NewCity};
use service::city_service;

use crate::errors::ApiError;
use crate::routes::{parse_id, parse_payload, require_field, require_object, ServerState};

#[utoipa::path(
    get, path = "/api/v1/states/{state_id}/cities", tag = "cities",
    params(("state_id" = String, Path, description = "Parent state ID")),
    responses((status = 200, description = "List OK"), (status = 404, description = "Not Found"))
)]
pub async fn list_by_state(
    State(state): State<ServerState>,
    Path(state_id): Path<String>,
) -> Result<Json<Vec<City>>, ApiError> {
    let id = parse_id(&state_id)?;
    let cities = city_service::list_cities_of_state(&state.store, id).await?;
    Ok(Json(cities))
}

#[utoipa::path(
    get, path = "/api/v1/cities/{city_id}", tag = "cities",
    params(("city_id" = String, Path, description = "City ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(city_id): Path<String>,
) -> Result<Json<City>, ApiError> {
    let id = parse_id(&city_id)?;
    city_service::get_city(&state.store, id)
        .await
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

#[utoipa::path(
    post, path = "/api/v1/states/{state_id}/cities", tag = "cities",
    params(("state_id" = String, Path, description = "Parent state ID")),
    request_body = crate::openapi::NewCityDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Path(state_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<City>), ApiError> {
    let id = parse_id(&state_id)?;
    if service::state_service::get_state(&state.store, id).await.is_none() {
        return Err(ApiError::not_found());
    }
    let payload = require_object(body)?;
    require_field(&payload, "name")?;
    let input: NewCity = parse_payload(payload)?;
    // the path-derived state_id wins over anything in the body
    let created = city_service::create_city(&state.store, id, input).await?;
    info!(id = %created.id, state_id = %id, "created city");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/v1/cities/{city_id}", tag = "cities",
    params(("city_id" = String, Path, description = "City ID")),
    request_body = crate::openapi::CityUpdateDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(city_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<City>, ApiError> {
    let id = parse_id(&city_id)?;
    if city_service::get_city(&state.store, id).await.is_none() {
        return Err(ApiError::not_found());
    }
    let payload = require_object(body)?;
    let patch: CityUpdate = parse_payload(payload)?;
    let updated = city_service::update_city(&state.store, id, patch).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/cities/{city_id}", tag = "cities",
    params(("city_id" = String, Path, description = "City ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(city_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&city_id)?;
    if !city_service::delete_city(&state.store, id).await? {
        return Err(ApiError::not_found());
    }
    info!(%id, "deleted city");
    Ok(Json(serde_json::json!({})))
}
