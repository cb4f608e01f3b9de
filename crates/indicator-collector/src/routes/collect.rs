//! 수동 수집 트리거 endpoint.

use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::info;

use crate::state::AppState;
use crate::stats::RunSummary;

/// POST /collect
///
/// 수집을 1회 동기 실행하고 요약을 반환합니다. 지표별 실패는 요약의
/// `errors`에 담기며 응답은 항상 200입니다.
pub async fn trigger_collect(State(state): State<Arc<AppState>>) -> Json<RunSummary> {
    info!("HTTP 트리거로 수집 시작");
    Json(state.collector.run_once().await)
}

pub fn collect_router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(trigger_collect).fallback(super::not_found))
}
