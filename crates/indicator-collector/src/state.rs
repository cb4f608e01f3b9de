//! HTTP 핸들러 공유 상태.

use crate::modules::Collector;

/// 라우터 상태.
///
/// 핸들러에는 `Arc<AppState>`로 전달됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 수집기 (카탈로그, 저장소 포함)
    pub collector: Collector,
}

impl AppState {
    pub fn new(collector: Collector) -> Self {
        Self { collector }
    }
}
