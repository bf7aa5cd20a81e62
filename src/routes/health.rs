//! Health check route

use crate::db;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::State;

/// GET /health - Liveness probe backed by a store ping
pub async fn health_check(State(state): State<AppState>) -> ApiResult<&'static str> {
    db::health_check(state.db()).await?;
    Ok("OK")
}
