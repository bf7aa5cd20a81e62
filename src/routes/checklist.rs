//! Daily meal checklist API routes
//!
//! The checklist is scoped to the server's current date: reads only return
//! today's rows and writes always stamp today's date, whatever the client
//! sends. Entries from prior days stay in the table but are unreachable
//! through this interface.

use crate::error::{ApiError, ApiResult};
use crate::models::{ChecklistEntry, MessageResponse, NewChecklistEntry};
use crate::repositories::ChecklistRepository;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;

/// Create checklist routes
pub fn checklist_routes() -> Router<AppState> {
    Router::new().route(
        "/checklist",
        get(list_checklist)
            .post(upsert_checklist)
            .delete(delete_checklist)
            .options(preflight),
    )
}

/// GET /checklist - List today's checklist entries
async fn list_checklist(State(state): State<AppState>) -> ApiResult<Json<Vec<ChecklistEntry>>> {
    let today = Local::now().date_naive();
    let entries = ChecklistRepository::list_for_date(state.db(), today).await?;
    Ok(Json(entries))
}

/// POST /checklist - Check or uncheck a meal item for today
///
/// Idempotent upsert keyed on (date, item); repeating the request only
/// overwrites `checked`.
async fn upsert_checklist(
    State(state): State<AppState>,
    payload: Result<Json<NewChecklistEntry>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ChecklistEntry>)> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let today = Local::now().date_naive();
    let entry = ChecklistRepository::upsert(state.db(), today, &req.item, req.checked).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Query parameters for DELETE /checklist
#[derive(Debug, Deserialize)]
struct DeleteChecklistParams {
    item: Option<String>,
}

/// DELETE /checklist?item=<string> - Remove today's entry for an item
async fn delete_checklist(
    State(state): State<AppState>,
    Query(params): Query<DeleteChecklistParams>,
) -> ApiResult<Json<MessageResponse>> {
    // An empty item is as useless as a missing one; reject both up front
    let item = params
        .item
        .filter(|item| !item.is_empty())
        .ok_or_else(|| ApiError::BadRequest("item is required".to_string()))?;

    let today = Local::now().date_naive();
    ChecklistRepository::delete(state.db(), today, &item).await?;

    Ok(Json(MessageResponse { message: "deleted" }))
}

/// OPTIONS /checklist - CORS preflight, empty 200
async fn preflight() -> StatusCode {
    StatusCode::OK
}
