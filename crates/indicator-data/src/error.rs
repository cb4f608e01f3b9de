//! 데이터 모듈 오류 타입.

use indicator_core::ParseError;
use thiserror::Error;

/// 오류 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// HTTP 상태 오류 또는 전송 실패
    Fetch,
    /// 응답 구조/값 오류
    Parse,
    /// 저장소 실행 실패
    Storage,
}

/// 데이터 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 성공이 아닌 HTTP 상태
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// 요청 전송/타임아웃 오류
    #[error("Request error: {0}")]
    Request(String),

    /// 응답 파싱 오류
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// 저장소 오류
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DataError {
    /// 오류 분류 반환.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::HttpStatus(_) | Self::Request(_) => ErrorKind::Fetch,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DataError::Storage(db_err.message().to_string()),
            _ => DataError::Storage(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DataError::Request(format!("timeout: {}", err))
        } else {
            DataError::Request(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
