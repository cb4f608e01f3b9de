//! API 에러 응답 타입.

use axum::{http::StatusCode, Json};
use indicator_data::DataError;
use serde::{Deserialize, Serialize};

/// API 에러 응답.
///
/// ```json
/// { "code": "STORAGE_ERROR", "message": "Storage error: ..." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "STORAGE_ERROR", "NOT_FOUND")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// 저장소 조회 실패를 500 응답으로 변환합니다.
pub fn storage_error(err: DataError) -> (StatusCode, Json<ApiErrorResponse>) {
    tracing::error!(error = %err, "저장소 조회 실패");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse::new("STORAGE_ERROR", err.to_string())),
    )
}
