use axum::{extract::State, Json};
use serde_json::{Map, Value};
use uuid::Uuid;

use models::Place;
use service::search_service::{self, SearchFilters};

use crate::errors::ApiError;
use crate::routes::{require_object, ServerState};

/// Read an id array from the payload. Missing keys, non-array values and
/// elements that are not well-formed UUID strings all degrade to nothing.
fn id_array(payload: &Map<String, Value>, key: &str) -> Vec<Uuid> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|s| Uuid::parse_str(s).ok())
                .collect()
        })
        .unwrap_or_default()
}

#[utoipa::path(
    post, path = "/api/v1/places_search", tag = "places",
    request_body = crate::openapi::SearchRequestDoc,
    responses((status = 200, description = "Search OK"), (status = 400, description = "Bad Request"))
)]
pub async fn places_search(
    State(state): State<ServerState>,
    body: Option<Json<Value>>,
) -> Result<Json<Vec<Place>>, ApiError> {
    let payload = require_object(body)?;
    let filters = SearchFilters {
        states: id_array(&payload, "states"),
        cities: id_array(&payload, "cities"),
        amenities: id_array(&payload, "amenities"),
    };
    let places = search_service::search_places(&state.store, filters).await;
    Ok(Json(places))
}
