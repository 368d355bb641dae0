use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use models::Amenity;
use service::place_service;

use crate::errors::ApiError;
use crate::routes::{parse_id, ServerState};

#[utoipa::path(
    get, path = "/api/v1/places/{place_id}/amenities", tag = "place amenities",
    params(("place_id" = String, Path, description = "Place ID")),
    responses((status = 200, description = "List OK"), (status = 404, description = "Not Found"))
)]
pub async fn list(
    State(state): State<ServerState>,
    Path(place_id): Path<String>,
) -> Result<Json<Vec<Amenity>>, ApiError> {
    let id = parse_id(&place_id)?;
    let amenities = place_service::list_place_amenities(&state.store, id).await?;
    Ok(Json(amenities))
}

#[utoipa::path(
    post, path = "/api/v1/places/{place_id}/amenities/{amenity_id}", tag = "place amenities",
    params(
        ("place_id" = String, Path, description = "Place ID"),
        ("amenity_id" = String, Path, description = "Amenity ID")
    ),
    responses(
        (status = 201, description = "Linked"),
        (status = 200, description = "Already linked"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn link(
    State(state): State<ServerState>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Amenity>), ApiError> {
    let place_id = parse_id(&place_id)?;
    let amenity_id = parse_id(&amenity_id)?;
    let (amenity, newly_linked) = place_service::link_amenity(&state.store, place_id, amenity_id).await?;
    let status = if newly_linked {
        info!(%place_id, %amenity_id, "linked amenity to place");
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(amenity)))
}

#[utoipa::path(
    delete, path = "/api/v1/places/{place_id}/amenities/{amenity_id}", tag = "place amenities",
    params(
        ("place_id" = String, Path, description = "Place ID"),
        ("amenity_id" = String, Path, description = "Amenity ID")
    ),
    responses((status = 200, description = "Unlinked"), (status = 404, description = "Not Found"))
)]
pub async fn unlink(
    State(state): State<ServerState>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let place_id = parse_id(&place_id)?;
    let amenity_id = parse_id(&amenity_id)?;
    place_service::unlink_amenity(&state.store, place_id, amenity_id).await?;
    info!(%place_id, %amenity_id, "unlinked amenity from place");
    Ok(Json(serde_json::json!({})))
}
