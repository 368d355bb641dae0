use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use models::{NewReview, Review, ReviewUpdate};
use service::{place_service, review_service, user_service};

use crate::errors::ApiError;
use crate::routes::{parse_id, parse_payload, require_field, require_object, ServerState};

#[utoipa::path(
    get, path = "/api/v1/places/{place_id}/reviews", tag = "reviews",
    params(("place_id" = String, Path, description = "Parent place ID")),
    responses((status = 200, description = "List OK"), (status = 404, description = "Not Found"))
)]
pub async fn list_by_place(
    State(state): State<ServerState>,
    Path(place_id): Path<String>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let id = parse_id(&place_id)?;
    let reviews = review_service::list_reviews_of_place(&state.store, id).await?;
    Ok(Json(reviews))
}

#[utoipa::path(
    get, path = "/api/v1/reviews/{review_id}", tag = "reviews",
    params(("review_id" = String, Path, description = "Review ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(review_id): Path<String>,
) -> Result<Json<Review>, ApiError> {
    let id = parse_id(&review_id)?;
    review_service::get_review(&state.store, id)
        .await
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

/// Same validation ordering as place creation, with `text` in place of
/// `name` as the required payload field.
#[utoipa::path(
    post, path = "/api/v1/places/{place_id}/reviews", tag = "reviews",
    params(("place_id" = String, Path, description = "Parent place ID")),
    request_body = crate::openapi::NewReviewDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Path(place_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let place_id = parse_id(&place_id)?;
    if place_service::get_place(&state.store, place_id).await.is_none() {
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
    require_field(&payload, "text")?;
    let input: NewReview = parse_payload(payload)?;
    let created = review_service::create_review(&state.store, place_id, input).await?;
    info!(id = %created.id, place_id = %place_id, user_id = %user_id, "created review");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/v1/reviews/{review_id}", tag = "reviews",
    params(("review_id" = String, Path, description = "Review ID")),
    request_body = crate::openapi::ReviewUpdateDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(review_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Json<Review>, ApiError> {
    let id = parse_id(&review_id)?;
    if review_service::get_review(&state.store, id).await.is_none() {
        return Err(ApiError::not_found());
    }
    let payload = require_object(body)?;
    let patch: ReviewUpdate = parse_payload(payload)?;
    let updated = review_service::update_review(&state.store, id, patch).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/reviews/{review_id}", tag = "reviews",
    params(("review_id" = String, Path, description = "Review ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found"))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(review_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&review_id)?;
    if !review_service::delete_review(&state.store, id).await? {
        return Err(ApiError::not_found());
    }
    info!(%id, "deleted review");
    Ok(Json(serde_json::json!({})))
}
