//! HTTP 시계열 제공자 클라이언트.

use std::time::Duration;

use async_trait::async_trait;
use indicator_core::{IndicatorSpec, Observation};

use super::{latest_observation, SeriesEnvelope, SeriesProvider};
use crate::{DataError, Result};

/// 기본 요청 타임아웃 (초).
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// reqwest 기반 시계열 제공자.
///
/// 각 지표의 `endpoint`를 GET으로 조회합니다.
#[derive(Clone)]
pub struct HttpSeriesProvider {
    client: reqwest::Client,
}

impl HttpSeriesProvider {
    /// 요청 타임아웃을 지정하여 생성합니다.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("indicator-collector/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SeriesProvider for HttpSeriesProvider {
    async fn fetch_latest(&self, spec: &IndicatorSpec) -> Result<Observation> {
        tracing::debug!(code = %spec.code, endpoint = %spec.endpoint, "시계열 조회");

        let response = self
            .client
            .get(&spec.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope = SeriesEnvelope::parse(&body)?;
        let observation = latest_observation(&envelope)?;

        tracing::debug!(
            code = %spec.code,
            period = %observation.period,
            value = observation.value,
            "최신 관측값 선택"
        );

        Ok(observation)
    }
}
