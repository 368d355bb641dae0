use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{Map, Value};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use service::storage::ObjectStore;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

pub mod amenities;
pub mod cities;
pub mod index;
pub mod places;
pub mod places_amenities;
pub mod reviews;
pub mod search;
pub mod states;
pub mod users;

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<ObjectStore>,
}

/// A path id that is not a well-formed UUID can never match a stored
/// entity, so it reads as absent.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found())
}

/// Reject missing bodies and non-object bodies with the canonical
/// `Not a JSON` message.
pub(crate) fn require_object(body: Option<Json<Value>>) -> Result<Map<String, Value>, ApiError> {
    match body {
        Some(Json(Value::Object(map))) => Ok(map),
        _ => Err(ApiError::bad_request("Not a JSON")),
    }
}

/// A required field counts as missing when absent or falsy: null, empty
/// string, zero, false, or an empty collection.
pub(crate) fn require_field(payload: &Map<String, Value>, field: &str) -> Result<(), ApiError> {
    let missing = match payload.get(field) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    };
    if missing {
        return Err(ApiError::bad_request(format!("Missing {}", field)));
    }
    Ok(())
}

/// Deserialize a validated payload into a typed input. Unknown fields are
/// ignored; a type mismatch surfaces as a descriptive 400.
pub(crate) fn parse_payload<T: serde::de::DeserializeOwned>(payload: Map<String, Value>) -> Result<T, ApiError> {
    serde_json::from_value(Value::Object(payload)).map_err(|e| ApiError::bad_request(e.to_string()))
}

async fn not_found_fallback() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Not found"})))
}

/// Build the full application router: versioned API, swagger docs, CORS and
/// request tracing.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/status", get(index::status))
        .route("/stats", get(index::stats))
        .route("/states", get(states::list).post(states::create))
        .route(
            "/states/:state_id",
            get(states::get).put(states::update).delete(states::delete),
        )
        .route(
            "/states/:state_id/cities",
            get(cities::list_by_state).post(cities::create),
        )
        .route(
            "/cities/:city_id",
            get(cities::get).put(cities::update).delete(cities::delete),
        )
        .route(
            "/cities/:city_id/places",
            get(places::list_by_city).post(places::create),
        )
        .route(
            "/places/:place_id",
            get(places::get).put(places::update).delete(places::delete),
        )
        .route("/places_search", post(search::places_search))
        .route(
            "/places/:place_id/reviews",
            get(reviews::list_by_place).post(reviews::create),
        )
        .route(
            "/reviews/:review_id",
            get(reviews::get).put(reviews::update).delete(reviews::delete),
        )
        .route("/users", get(users::list).post(users::create))
        .route(
            "/users/:user_id",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/amenities", get(amenities::list).post(amenities::create))
        .route(
            "/amenities/:amenity_id",
            get(amenities::get).put(amenities::update).delete(amenities::delete),
        )
        .route("/places/:place_id/amenities", get(places_amenities::list))
        .route(
            "/places/:place_id/amenities/:amenity_id",
            post(places_amenities::link).delete(places_amenities::unlink),
        );

    Router::new()
        .nest("/api/v1", api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found_fallback)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn falsy_required_fields_count_as_missing() {
        let missing = [
            json!({}),
            json!({"name": null}),
            json!({"name": ""}),
            json!({"name": 0}),
            json!({"name": 0.0}),
            json!({"name": false}),
            json!({"name": []}),
            json!({"name": {}}),
        ];
        for body in missing {
            let err = require_field(&payload(body), "name").unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(err.message, "Missing name");
        }

        assert!(require_field(&payload(json!({"name": "Loft"})), "name").is_ok());
        assert!(require_field(&payload(json!({"name": 3})), "name").is_ok());
        assert!(require_field(&payload(json!({"name": true})), "name").is_ok());
    }
}
