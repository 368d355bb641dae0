use axum::{extract::State, Json};

use common::types::Health;
use service::storage::StoreCounts;

use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/api/v1/status", tag = "index",
    responses((status = 200, description = "API is alive"))
)]
pub async fn status() -> Json<Health> {
    Json(Health { status: "OK" })
}

#[utoipa::path(
    get, path = "/api/v1/stats", tag = "index",
    responses((status = 200, description = "Per-type object counts"))
)]
pub async fn stats(State(state): State<ServerState>) -> Json<StoreCounts> {
    Json(state.store.counts().await)
}
