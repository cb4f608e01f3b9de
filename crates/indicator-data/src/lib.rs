//! 지표 데이터 관리.
//!
//! - `provider`: 원격 시계열 API 클라이언트
//! - `storage`: 지표 레코드 및 수집 로그 저장소 (SQLite)

pub mod error;
pub mod provider;
pub mod storage;

pub use error::{DataError, ErrorKind, Result};
pub use provider::{
    latest_observation, HttpSeriesProvider, SeriesEnvelope, SeriesProvider,
    DEFAULT_FETCH_TIMEOUT_SECS,
};
pub use storage::{clamp_limit, IndicatorStore, SqliteStore, DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT};
