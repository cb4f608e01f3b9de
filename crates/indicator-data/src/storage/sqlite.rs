//! SQLite 지표 저장소.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indicator_core::{
    CollectionLogEntry, IndicatorRecord, IndicatorSpec, NewCollectionLog, Observation,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::{init_schema, IndicatorStore};
use crate::Result;

/// SQLite 기반 [`IndicatorStore`] 구현.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// 기존 풀로 생성합니다.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// URL로 연결하고 스키마를 초기화합니다.
    ///
    /// 데이터베이스 파일이 없으면 생성합니다.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        init_schema(&pool).await?;
        Ok(Self::new(pool))
    }

    /// 메모리 데이터베이스 (단일 연결, 프로세스 종료 시 소멸).
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        init_schema(&pool).await?;
        Ok(Self::new(pool))
    }

    /// 내부 연결 풀.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 연결 풀을 닫습니다.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl IndicatorStore for SqliteStore {
    async fn upsert_indicator(
        &self,
        spec: &IndicatorSpec,
        observation: &Observation,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO ethiopian_indicators (
                indicator_name, indicator_code, macro_angle, value, period_date, frequency, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (indicator_code, period_date) DO UPDATE SET
                indicator_name = excluded.indicator_name,
                macro_angle = excluded.macro_angle,
                value = excluded.value,
                frequency = excluded.frequency,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&spec.name)
        .bind(&spec.code)
        .bind(&spec.macro_angle)
        .bind(observation.value)
        .bind(observation.period_date)
        .bind(spec.frequency.as_str())
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_collection_log(&self, log: &NewCollectionLog) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO collection_logs (
                collection_date,
                total_indicators,
                successful_collections,
                failed_collections,
                error_details,
                execution_duration_ms
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(log.collection_date)
        .bind(log.total_indicators)
        .bind(log.successful_collections)
        .bind(log.failed_collections)
        .bind(&log.error_details)
        .bind(log.execution_duration_ms)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn recent_indicators(&self, limit: i64) -> Result<Vec<IndicatorRecord>> {
        let records = sqlx::query_as::<_, IndicatorRecord>(
            r#"
            SELECT indicator_name, indicator_code, macro_angle, value, period_date, frequency, updated_at
            FROM ethiopian_indicators
            ORDER BY period_date DESC, indicator_code
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn recent_logs(&self, limit: i64) -> Result<Vec<CollectionLogEntry>> {
        let logs = sqlx::query_as::<_, CollectionLogEntry>(
            r#"
            SELECT id, collection_date, total_indicators, successful_collections,
                   failed_collections, error_details, execution_duration_ms
            FROM collection_logs
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    async fn latest_per_indicator(&self) -> Result<Vec<IndicatorRecord>> {
        let records = sqlx::query_as::<_, IndicatorRecord>(
            r#"
            SELECT i.indicator_name, i.indicator_code, i.macro_angle, i.value,
                   i.period_date, i.frequency, i.updated_at
            FROM ethiopian_indicators i
            WHERE i.period_date = (
                SELECT MAX(j.period_date)
                FROM ethiopian_indicators j
                WHERE j.indicator_code = i.indicator_code
            )
            ORDER BY i.indicator_code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
