//! 경제 지표 수집 모듈.
//!
//! # 동작
//! 1. 카탈로그 순서대로 지표를 하나씩 처리 (병렬 처리 없음)
//! 2. 엔드포인트 조회 → 마지막 관측값 검증 → `(indicator_code, period_date)` UPSERT
//! 3. 실패 시 고정 지연 후 1회 재시도, 재시도도 실패하면 실패로 기록
//! 4. 지표 간 짧은 대기 (API rate limiting)
//! 5. 실행 요약을 `collection_logs`에 1건 기록
//!
//! 개별 지표의 실패는 실행 전체를 중단시키지 않습니다.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use indicator_core::{Catalog, IndicatorSpec, Observation};
use indicator_data::{IndicatorStore, SeriesProvider};
use tracing::{debug, error, info, warn};

use crate::config::CollectConfig;
use crate::stats::{IndicatorOutcome, RunSummary};

/// 지표당 최대 시도 횟수 (최초 1회 + 재시도 1회)
pub const MAX_ATTEMPTS: u32 = 2;

/// 지표 수집기.
///
/// 타이머와 HTTP 트리거가 같은 인스턴스를 공유합니다.
#[derive(Clone)]
pub struct Collector {
    provider: Arc<dyn SeriesProvider>,
    store: Arc<dyn IndicatorStore>,
    catalog: Catalog,
    config: CollectConfig,
}

impl Collector {
    pub fn new(
        provider: Arc<dyn SeriesProvider>,
        store: Arc<dyn IndicatorStore>,
        catalog: Catalog,
        config: CollectConfig,
    ) -> Self {
        Self {
            provider,
            store,
            catalog,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &Arc<dyn IndicatorStore> {
        &self.store
    }

    /// 조회 + 저장 1회 시도.
    async fn attempt(&self, spec: &IndicatorSpec) -> indicator_data::Result<Observation> {
        let observation = self.provider.fetch_latest(spec).await?;
        self.store
            .upsert_indicator(spec, &observation, Utc::now())
            .await?;
        Ok(observation)
    }

    /// 지표 하나를 수집합니다.
    ///
    /// 모든 실패는 [`IndicatorOutcome`]으로 반환되며 에러를 전파하지 않습니다.
    pub async fn collect_indicator(&self, spec: &IndicatorSpec) -> IndicatorOutcome {
        let start = Instant::now();
        let mut attempts = 0;

        loop {
            attempts += 1;

            match self.attempt(spec).await {
                Ok(observation) => {
                    info!(
                        code = %spec.code,
                        period_date = %observation.period_date,
                        value = observation.value,
                        attempts,
                        "지표 저장 완료"
                    );
                    return IndicatorOutcome::success(&spec.code, attempts, start.elapsed());
                }
                Err(e) if attempts < MAX_ATTEMPTS => {
                    warn!(
                        code = %spec.code,
                        kind = ?e.kind(),
                        error = %e,
                        retry_in_ms = self.config.retry_delay_ms,
                        "수집 실패, 재시도 대기"
                    );
                    tokio::time::sleep(self.config.retry_delay()).await;
                }
                Err(e) => {
                    error!(
                        code = %spec.code,
                        kind = ?e.kind(),
                        error = %e,
                        attempts,
                        "재시도 후에도 수집 실패"
                    );
                    return IndicatorOutcome::failure(
                        &spec.code,
                        attempts,
                        start.elapsed(),
                        e.to_string(),
                    );
                }
            }
        }
    }

    /// 카탈로그 전체를 순서대로 수집합니다.
    pub async fn collect_all(&self) -> RunSummary {
        let start = Instant::now();
        let mut summary = RunSummary::new(self.catalog.len());

        info!(indicators = self.catalog.len(), "지표 수집 시작");

        for (idx, spec) in self.catalog.iter().enumerate() {
            debug!(
                code = %spec.code,
                progress = format!("{}/{}", idx + 1, self.catalog.len()),
                "수집 시작"
            );

            let outcome = self.collect_indicator(spec).await;
            summary.record(&outcome);

            // Rate limiting
            if idx + 1 < self.catalog.len() {
                tokio::time::sleep(self.config.request_delay()).await;
            }
        }

        summary.execution_duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        summary
    }

    /// 실행 요약을 수집 로그로 기록합니다.
    pub async fn log_run(&self, summary: &RunSummary) -> indicator_data::Result<i64> {
        let entry = summary.to_log_entry(Utc::now().date_naive());
        let id = self.store.insert_collection_log(&entry).await?;
        debug!(log_id = id, "수집 로그 저장 완료");
        Ok(id)
    }

    /// 전체 수집 + 로그 기록 (타이머/HTTP 공통 진입점).
    ///
    /// 로그 기록 실패는 에러 로그만 남기고 요약은 그대로 반환합니다.
    pub async fn run_once(&self) -> RunSummary {
        let summary = self.collect_all().await;
        summary.log_summary("지표 수집");

        if let Err(e) = self.log_run(&summary).await {
            error!(error = %e, "수집 로그 저장 실패");
        }

        summary
    }
}
