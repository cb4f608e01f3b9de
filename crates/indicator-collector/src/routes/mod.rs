//! HTTP 라우트.
//!
//! # 라우트 구조
//!
//! - `POST /collect` - 수집 1회 실행
//! - `GET /data?limit=N` - 최근 지표 레코드
//! - `GET /latest` - 지표별 최신 레코드
//! - `GET /indicators` - 지표 카탈로그
//! - `GET /logs?limit=N` - 최근 수집 로그
//! - `GET /health` - 헬스 체크
//!
//! 그 외 경로는 404 `Not found`.

pub mod collect;
pub mod error;
pub mod health;
pub mod indicators;
pub mod logs;

pub use collect::collect_router;
pub use error::{storage_error, ApiErrorResponse};
pub use health::{health_router, HealthResponse};
pub use indicators::{data_router, indicators_router, latest_router, LimitQuery};
pub use logs::logs_router;

use axum::{http::StatusCode, response::IntoResponse, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// 등록되지 않은 경로 또는 메서드.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

/// 전체 라우터 생성.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/collect", collect_router())
        .nest("/data", data_router())
        .nest("/latest", latest_router())
        .nest("/indicators", indicators_router())
        .nest("/logs", logs_router())
        .nest("/health", health_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
