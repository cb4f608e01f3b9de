//! Standalone economic indicator collector CLI.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use indicator_core::{init_logging, Catalog, LogConfig};
use indicator_data::{clamp_limit, HttpSeriesProvider, IndicatorStore, SqliteStore};
use indicator_collector::{modules, routes, AppState, Collector, CollectorConfig};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "indicator-collector")]
#[command(about = "Economic Indicator Collector", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// 전체 지표 1회 수집 후 요약 출력
    Collect,

    /// 데몬 모드: 주기적으로 전체 수집 실행
    Daemon,

    /// HTTP 서버 실행 (`/collect`, `/data`, `/logs`, `/health`)
    Serve,

    /// 최근 수집 로그 출력
    Logs {
        /// 출력 개수 (1..=100)
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },

    /// 지표 카탈로그 출력
    Catalog,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 로깅 초기화
    init_logging(LogConfig {
        level: format!(
            "indicator_collector={level},indicator_data={level},indicator_core={level},tower_http={level}",
            level = cli.log_level
        ),
        ..LogConfig::from_env()
    })?;

    info!("Indicator Collector 시작");

    // 설정 로드
    let config = CollectorConfig::from_env()?;
    tracing::debug!(database_url = %config.database_url, "설정 로드 완료");

    let catalog = Catalog::load_or_reference(config.catalog_path.as_ref())?;
    info!(indicators = catalog.len(), "카탈로그 로드 완료");

    if let Commands::Catalog = cli.command {
        println!("{}", serde_json::to_string_pretty(catalog.as_slice())?);
        return Ok(());
    }

    // DB 연결
    let store = SqliteStore::connect(&config.database_url, config.database_max_connections).await?;
    info!("데이터베이스 연결 성공");

    let provider = HttpSeriesProvider::new(config.collect.fetch_timeout())?;
    let collector = Collector::new(
        Arc::new(provider),
        Arc::new(store.clone()),
        catalog,
        config.collect.clone(),
    );

    // 명령 실행
    match cli.command {
        Commands::Collect => {
            let summary = collector.run_once().await;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Daemon => {
            info!(
                "=== 데몬 모드 시작 (주기: {}분) ===",
                config.daemon.interval_minutes
            );

            let shutdown_token = CancellationToken::new();
            tokio::spawn(shutdown_signal(shutdown_token.clone()));

            modules::run_scheduler(collector, config.daemon.interval(), shutdown_token).await;
        }
        Commands::Serve => {
            let shutdown_token = CancellationToken::new();

            let scheduler = config.server.scheduler_enabled.then(|| {
                info!(
                    interval_minutes = config.daemon.interval_minutes,
                    "서버 내 스케줄러 활성화"
                );
                tokio::spawn(modules::run_scheduler(
                    collector.clone(),
                    config.daemon.interval(),
                    shutdown_token.clone(),
                ))
            });

            let addr = config.server.socket_addr()?;
            let app = routes::create_router(Arc::new(AppState::new(collector)));

            let listener = tokio::net::TcpListener::bind(addr).await?;
            info!(%addr, "HTTP 서버 시작");

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal(shutdown_token.clone()))
                .await?;

            shutdown_token.cancel();
            if let Some(handle) = scheduler {
                if let Err(e) = handle.await {
                    warn!(error = %e, "스케줄러 태스크 종료 실패");
                }
            }
        }
        Commands::Logs { limit } => {
            let logs = store.recent_logs(clamp_limit(Some(limit))).await?;
            println!("{}", serde_json::to_string_pretty(&logs)?);
        }
        // DB 연결 전에 처리됨
        Commands::Catalog => {}
    }

    store.close().await;
    info!("Indicator Collector 종료");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 종료 토큰을 취소합니다.
async fn shutdown_signal(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Ctrl+C 핸들러 설치 실패");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM 핸들러 설치 실패");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Ctrl+C 수신, 종료 시작");
        }
        _ = terminate => {
            warn!("SIGTERM 수신, 종료 시작");
        }
        _ = shutdown_token.cancelled() => {}
    }

    shutdown_token.cancel();
}
