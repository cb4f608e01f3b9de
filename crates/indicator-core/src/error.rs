//! 도메인 에러 타입.

use thiserror::Error;

/// 제공자 응답을 관측값으로 변환하는 중 발생하는 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// 응답 본문이 기대한 JSON 구조가 아님
    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    /// `series[0].observations`가 없거나 비어 있음
    #[error("No observations")]
    NoObservations,

    /// 인식할 수 없는 기간 형식
    #[error("Invalid observation period: {0}")]
    InvalidPeriod(String),

    /// 숫자가 아닌 값
    #[error("Invalid observation value: {0}")]
    InvalidValue(String),
}

/// 카탈로그 로드 에러.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 파일 읽기/역직렬화 실패
    #[error("카탈로그 로드 실패: {0}")]
    Load(#[from] config::ConfigError),

    /// 지표가 하나도 없음
    #[error("카탈로그가 비어 있습니다")]
    Empty,

    /// 지표 코드 중복
    #[error("중복된 지표 코드: {0}")]
    DuplicateCode(String),

    /// 필수 필드 누락
    #[error("지표 {code}: {field} 필드가 비어 있습니다")]
    MissingField {
        /// 지표 코드
        code: String,
        /// 비어 있는 필드명
        field: &'static str,
    },
}
