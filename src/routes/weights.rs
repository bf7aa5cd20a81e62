//! Weight entry API routes

use crate::error::{ApiError, ApiResult};
use crate::models::{MessageResponse, NewWeightEntry, WeightEntry};
use crate::repositories::WeightRepository;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;

/// Create weight routes
///
/// Verbs outside GET/POST/DELETE/OPTIONS are rejected with 405 by the
/// method router.
pub fn weight_routes() -> Router<AppState> {
    Router::new().route(
        "/weights",
        get(list_weights)
            .post(create_weight)
            .delete(delete_weight)
            .options(preflight),
    )
}

/// GET /weights - List all weight entries, ordered by date ascending
async fn list_weights(State(state): State<AppState>) -> ApiResult<Json<Vec<WeightEntry>>> {
    let entries = WeightRepository::list(state.db()).await?;
    Ok(Json(entries))
}

/// POST /weights - Record a weight entry
///
/// The date defaults to the server's current date when omitted.
async fn create_weight(
    State(state): State<AppState>,
    payload: Result<Json<NewWeightEntry>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<WeightEntry>)> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let date = req.date.unwrap_or_else(|| Local::now().date_naive());
    let entry = WeightRepository::insert(state.db(), date, req.value).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Query parameters for DELETE /weights
#[derive(Debug, Deserialize)]
struct DeleteWeightParams {
    id: Option<i64>,
}

/// DELETE /weights?id=<int> - Delete a weight entry by id
///
/// Deleting a nonexistent id still returns 200.
async fn delete_weight(
    State(state): State<AppState>,
    Query(params): Query<DeleteWeightParams>,
) -> ApiResult<Json<MessageResponse>> {
    let id = params
        .id
        .ok_or_else(|| ApiError::BadRequest("id is required".to_string()))?;

    WeightRepository::delete_by_id(state.db(), id).await?;

    Ok(Json(MessageResponse {
        message: "Data deleted",
    }))
}

/// OPTIONS /weights - CORS preflight, empty 200
async fn preflight() -> StatusCode {
    StatusCode::OK
}
