//! Standalone economic indicator collector.
//!
//! 이 crate는 지표 카탈로그를 순차적으로 수집하는 라이브러리와 바이너리를 제공합니다:
//! - 지표별 수집 (조회 → 검증 → UPSERT, 1회 재시도)
//! - 전체 실행 및 수집 로그 기록
//! - 주기 실행 스케줄러
//! - HTTP 트리거 (`/collect`, `/data`, `/logs`, `/health`)

pub mod config;
pub mod error;
pub mod modules;
pub mod routes;
pub mod state;
pub mod stats;

pub use config::CollectorConfig;
pub use error::{CollectorError, Result};
pub use modules::Collector;
pub use state::AppState;
pub use stats::{IndicatorOutcome, RunSummary};
