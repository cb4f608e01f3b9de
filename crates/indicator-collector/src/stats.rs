//! 수집 실행 요약 구조체.

use chrono::NaiveDate;
use indicator_core::NewCollectionLog;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 지표 하나의 수집 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorOutcome {
    /// 지표 코드
    pub code: String,
    /// 성공 여부
    pub success: bool,
    /// 시도 횟수 (1 또는 2)
    pub attempts: u32,
    /// 소요 시간
    pub elapsed: Duration,
    /// 마지막 실패 메시지
    pub error: Option<String>,
}

impl IndicatorOutcome {
    pub fn success(code: impl Into<String>, attempts: u32, elapsed: Duration) -> Self {
        Self {
            code: code.into(),
            success: true,
            attempts,
            elapsed,
            error: None,
        }
    }

    pub fn failure(
        code: impl Into<String>,
        attempts: u32,
        elapsed: Duration,
        error: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            success: false,
            attempts,
            elapsed,
            error: Some(error.into()),
        }
    }
}

/// 전체 실행 요약 (`/collect` 응답 본문).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// 카탈로그 크기
    pub total: usize,
    /// 성공 횟수
    pub success: usize,
    /// 실패 횟수
    pub failed: usize,
    /// `"<code>: <message>"` 형식의 실패 목록 (카탈로그 순서)
    pub errors: Vec<String>,
    /// 실행 소요 시간 (밀리초)
    pub execution_duration_ms: u64,
}

impl RunSummary {
    /// 카탈로그 크기로 새 요약 생성
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// 지표 결과 반영
    pub fn record(&mut self, outcome: &IndicatorOutcome) {
        if outcome.success {
            self.success += 1;
        } else {
            self.failed += 1;
            self.errors.push(format!(
                "{}: {}",
                outcome.code,
                outcome.error.as_deref().unwrap_or("unknown error")
            ));
        }
    }

    /// 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }

    /// 수집 로그 입력으로 변환
    pub fn to_log_entry(&self, collection_date: NaiveDate) -> NewCollectionLog {
        NewCollectionLog::new(
            collection_date,
            self.total,
            self.success,
            self.failed,
            &self.errors,
            self.execution_duration_ms,
        )
    }

    /// 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            total = self.total,
            success = self.success,
            failed = self.failed,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.execution_duration_ms as f64 / 1000.0),
            "수집 완료"
        );
        for error in &self.errors {
            tracing::warn!(operation = operation, error = %error, "수집 실패 항목");
        }
    }
}
