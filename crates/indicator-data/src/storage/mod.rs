//! 지표 저장소.
//!
//! 지표 레코드는 `(indicator_code, period_date)` 키로 UPSERT되며,
//! 수집 로그는 추가만 됩니다.

mod schema;
mod sqlite;

pub use schema::init_schema;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indicator_core::{CollectionLogEntry, IndicatorRecord, IndicatorSpec, NewCollectionLog, Observation};

use crate::Result;

/// 조회 기본 개수.
pub const DEFAULT_QUERY_LIMIT: i64 = 20;
/// 조회 최대 개수.
pub const MAX_QUERY_LIMIT: i64 = 100;

/// 조회 개수를 `1..=MAX_QUERY_LIMIT` 범위로 제한합니다.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_QUERY_LIMIT).clamp(1, MAX_QUERY_LIMIT)
}

/// 지표 저장소 trait.
#[async_trait]
pub trait IndicatorStore: Send + Sync {
    /// 관측값을 UPSERT합니다.
    ///
    /// 같은 키가 있으면 값과 `updated_at`을 덮어쓰고, 이름/분류/주기는
    /// 이번 실행의 지표 정의로 갱신합니다.
    async fn upsert_indicator(
        &self,
        spec: &IndicatorSpec,
        observation: &Observation,
        updated_at: DateTime<Utc>,
    ) -> Result<()>;

    /// 수집 로그를 추가하고 ID를 반환합니다.
    async fn insert_collection_log(&self, log: &NewCollectionLog) -> Result<i64>;

    /// 최근 레코드 (`period_date` 내림차순).
    async fn recent_indicators(&self, limit: i64) -> Result<Vec<IndicatorRecord>>;

    /// 최근 수집 로그 (최신순).
    async fn recent_logs(&self, limit: i64) -> Result<Vec<CollectionLogEntry>>;

    /// 지표 코드별 가장 최근 레코드.
    async fn latest_per_indicator(&self) -> Result<Vec<IndicatorRecord>>;
}
