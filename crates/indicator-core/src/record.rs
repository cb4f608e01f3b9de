//! 저장 레코드 타입.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 저장된 지표 레코드 (`ethiopian_indicators` 테이블).
///
/// 자연 키는 `(indicator_code, period_date)`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct IndicatorRecord {
    pub indicator_name: String,
    pub indicator_code: String,
    pub macro_angle: String,
    pub value: f64,
    pub period_date: NaiveDate,
    pub frequency: String,
    pub updated_at: DateTime<Utc>,
}

/// 저장된 수집 로그 (`collection_logs` 테이블, append-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct CollectionLogEntry {
    pub id: i64,
    /// 실행 일자 (UTC)
    pub collection_date: NaiveDate,
    pub total_indicators: i64,
    pub successful_collections: i64,
    pub failed_collections: i64,
    /// `"; "`로 연결된 에러 메시지
    pub error_details: String,
    pub execution_duration_ms: i64,
}

/// 새 수집 로그 입력.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCollectionLog {
    pub collection_date: NaiveDate,
    pub total_indicators: i64,
    pub successful_collections: i64,
    pub failed_collections: i64,
    pub error_details: String,
    pub execution_duration_ms: i64,
}

impl NewCollectionLog {
    /// 에러 목록을 `"; "`로 연결하여 로그 입력을 생성합니다.
    pub fn new(
        collection_date: NaiveDate,
        total: usize,
        success: usize,
        failed: usize,
        errors: &[String],
        execution_duration_ms: u64,
    ) -> Self {
        Self {
            collection_date,
            total_indicators: total as i64,
            successful_collections: success as i64,
            failed_collections: failed as i64,
            error_details: errors.join("; "),
            execution_duration_ms: i64::try_from(execution_duration_ms).unwrap_or(i64::MAX),
        }
    }
}
