//! 환경변수 기반 설정 모듈.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use indicator_data::DEFAULT_FETCH_TIMEOUT_SECS;

use crate::error::CollectorError;
use crate::Result;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 데이터베이스 URL (SQLite)
    pub database_url: String,
    /// 최대 DB 연결 수
    pub database_max_connections: u32,
    /// 카탈로그 TOML 파일 경로 (없으면 기본 카탈로그)
    pub catalog_path: Option<PathBuf>,
    /// 지표 수집 설정
    pub collect: CollectConfig,
    /// 데몬 모드 설정
    pub daemon: DaemonConfig,
    /// HTTP 서버 설정
    pub server: ServerConfig,
}

/// 지표 수집 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectConfig {
    /// 요청 타임아웃 (초)
    pub fetch_timeout_secs: u64,
    /// 재시도 전 대기 (밀리초)
    pub retry_delay_ms: u64,
    /// 지표 간 대기 (밀리초)
    pub request_delay_ms: u64,
}

/// 데몬 모드 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonConfig {
    /// 수집 주기 (분 단위)
    pub interval_minutes: u64,
}

/// HTTP 서버 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 바인딩할 포트
    pub port: u16,
    /// 서버 프로세스 안에서 스케줄러 실행 여부
    pub scheduler_enabled: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            retry_delay_ms: 5_000,
            request_delay_ms: 200,
        }
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 24 * 60,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            scheduler_enabled: false,
        }
    }
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = CollectConfig::default();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://indicators.db?mode=rwc".to_string()),
            database_max_connections: env_var_parse("DATABASE_MAX_CONNECTIONS", 5),
            catalog_path: std::env::var("COLLECTOR_CATALOG_PATH").ok().map(PathBuf::from),
            collect: CollectConfig {
                fetch_timeout_secs: env_var_parse(
                    "COLLECTOR_FETCH_TIMEOUT_SECS",
                    defaults.fetch_timeout_secs,
                ),
                retry_delay_ms: env_var_parse("COLLECTOR_RETRY_DELAY_MS", defaults.retry_delay_ms),
                request_delay_ms: env_var_parse(
                    "COLLECTOR_REQUEST_DELAY_MS",
                    defaults.request_delay_ms,
                ),
            },
            daemon: DaemonConfig {
                interval_minutes: env_var_parse(
                    "COLLECTOR_INTERVAL_MINUTES",
                    DaemonConfig::default().interval_minutes,
                ),
            },
            server: ServerConfig {
                host: std::env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env_var_parse("API_PORT", 3000),
                scheduler_enabled: env_var_bool("SCHEDULER_ENABLED", false),
            },
        })
    }
}

impl CollectConfig {
    /// 지연 없는 설정 (테스트/일회성 실행용)
    pub fn immediate() -> Self {
        Self {
            retry_delay_ms: 0,
            request_delay_ms: 0,
            ..Self::default()
        }
    }

    /// 요청 타임아웃을 Duration으로 반환
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// 재시도 대기를 Duration으로 반환
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// 지표 간 대기를 Duration으로 반환
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl DaemonConfig {
    /// 수집 주기를 Duration으로 반환 (최소 1분)
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.max(1) * 60)
    }
}

impl ServerConfig {
    /// 바인딩 주소
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| CollectorError::Config(format!("잘못된 바인딩 주소: {}", e)))
    }
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// 환경변수에서 bool 값 파싱
fn env_var_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_defaults() {
        let config = CollectConfig::default();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(config.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
        assert_eq!(config.retry_delay(), Duration::from_secs(5));
        assert_eq!(config.request_delay(), Duration::from_millis(200));
    }

    #[test]
    fn test_immediate_has_no_delays() {
        let config = CollectConfig::immediate();
        assert_eq!(config.retry_delay(), Duration::ZERO);
        assert_eq!(config.request_delay(), Duration::ZERO);
        assert_eq!(config.fetch_timeout_secs, 30);
    }

    #[test]
    fn test_daemon_interval_has_floor() {
        assert_eq!(
            DaemonConfig { interval_minutes: 0 }.interval(),
            Duration::from_secs(60)
        );
        assert_eq!(DaemonConfig::default().interval(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig::default();
        assert_eq!(server.socket_addr().unwrap().port(), 3000);

        let bad = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_env_var_parse_falls_back() {
        assert_eq!(env_var_parse("INDICATOR_TEST_UNSET_VARIABLE", 7u64), 7);
        assert!(!env_var_bool("INDICATOR_TEST_UNSET_VARIABLE", false));
    }
}
