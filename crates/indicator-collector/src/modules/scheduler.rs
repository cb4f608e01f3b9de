//! 주기 실행 스케줄러.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::Collector;

/// 종료 토큰이 취소될 때까지 `interval`마다 [`Collector::run_once`]를 실행합니다.
///
/// 첫 실행은 즉시 시작됩니다. 진행 중인 실행은 취소되지 않고 끝까지 수행되며,
/// 실행이 주기보다 길어지면 밀린 tick은 건너뜁니다.
pub async fn run_scheduler(collector: Collector, interval: Duration, shutdown: CancellationToken) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(interval_secs = interval.as_secs(), "스케줄러 시작");

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("종료 신호 수신, 스케줄러 종료");
                break;
            }
            _ = ticker.tick() => {
                info!("=== 예약 수집 시작 ===");
                let summary = collector.run_once().await;
                info!(
                    success = summary.success,
                    failed = summary.failed,
                    next_in_secs = interval.as_secs(),
                    "=== 예약 수집 완료 ==="
                );
            }
        }
    }
}
