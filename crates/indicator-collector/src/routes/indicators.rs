//! 지표 조회 endpoint.
//!
//! - `GET /data?limit=N`: 최근 레코드 (`period_date` 내림차순)
//! - `GET /latest`: 지표 코드별 최신 레코드
//! - `GET /indicators`: 설정된 카탈로그

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use indicator_core::{IndicatorRecord, IndicatorSpec};
use indicator_data::clamp_limit;
use serde::Deserialize;
use std::sync::Arc;

use super::error::{storage_error, ApiErrorResponse};
use crate::state::AppState;

/// 조회 개수 쿼리 (`/data`, `/logs` 공용).
///
/// 숫자가 아닌 값은 기본값으로 처리합니다.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}

impl LimitQuery {
    /// `1..=100` 범위로 보정한 조회 개수.
    pub fn resolved(&self) -> i64 {
        clamp_limit(self.limit.as_deref().and_then(|s| s.trim().parse().ok()))
    }
}

/// GET /data
pub async fn recent_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<IndicatorRecord>>, (StatusCode, Json<ApiErrorResponse>)> {
    let records = state
        .collector
        .store()
        .recent_indicators(query.resolved())
        .await
        .map_err(storage_error)?;

    Ok(Json(records))
}

/// GET /latest
pub async fn latest_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IndicatorRecord>>, (StatusCode, Json<ApiErrorResponse>)> {
    let records = state
        .collector
        .store()
        .latest_per_indicator()
        .await
        .map_err(storage_error)?;

    Ok(Json(records))
}

/// GET /indicators
pub async fn list_indicators(State(state): State<Arc<AppState>>) -> Json<Vec<IndicatorSpec>> {
    Json(state.collector.catalog().as_slice().to_vec())
}

pub fn data_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(recent_data).fallback(super::not_found))
}

pub fn latest_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(latest_data).fallback(super::not_found))
}

pub fn indicators_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_indicators).fallback(super::not_found))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>) -> LimitQuery {
        LimitQuery {
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_limit_resolution() {
        assert_eq!(query(None).resolved(), 20);
        assert_eq!(query(Some("5")).resolved(), 5);
        assert_eq!(query(Some("500")).resolved(), 100);
        assert_eq!(query(Some("-3")).resolved(), 1);
        assert_eq!(query(Some("abc")).resolved(), 20);
        assert_eq!(query(Some("")).resolved(), 20);
    }
}
