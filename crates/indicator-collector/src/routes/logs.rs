//! 수집 로그 조회 endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use indicator_core::CollectionLogEntry;
use std::sync::Arc;

use super::error::{storage_error, ApiErrorResponse};
use super::indicators::LimitQuery;
use crate::state::AppState;

/// GET /logs
///
/// 최근 수집 로그를 최신순으로 반환합니다.
pub async fn recent_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<CollectionLogEntry>>, (StatusCode, Json<ApiErrorResponse>)> {
    let logs = state
        .collector
        .store()
        .recent_logs(query.resolved())
        .await
        .map_err(storage_error)?;

    Ok(Json(logs))
}

pub fn logs_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(recent_logs).fallback(super::not_found))
}
