//! 테이블 스키마.

use sqlx::SqlitePool;

use crate::Result;

const CREATE_INDICATORS: &str = r#"
CREATE TABLE IF NOT EXISTS ethiopian_indicators (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    indicator_name TEXT NOT NULL,
    indicator_code TEXT NOT NULL,
    macro_angle TEXT NOT NULL,
    value REAL NOT NULL,
    period_date TEXT NOT NULL,
    frequency TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE (indicator_code, period_date)
)
"#;

const CREATE_LOGS: &str = r#"
CREATE TABLE IF NOT EXISTS collection_logs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    collection_date TEXT NOT NULL,
    total_indicators INTEGER NOT NULL,
    successful_collections INTEGER NOT NULL,
    failed_collections INTEGER NOT NULL,
    error_details TEXT NOT NULL DEFAULT '',
    execution_duration_ms INTEGER NOT NULL
)
"#;

const CREATE_PERIOD_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_ethiopian_indicators_period
    ON ethiopian_indicators (period_date DESC)
"#;

/// 테이블이 없으면 생성합니다.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    for statement in [CREATE_INDICATORS, CREATE_LOGS, CREATE_PERIOD_INDEX] {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("스키마 초기화 완료");
    Ok(())
}
