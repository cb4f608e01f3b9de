//! 시계열 데이터 제공자.
//!
//! 제공자 응답 계약:
//!
//! ```json
//! { "series": [ { "observations": [ { "period": "2024-03", "value": "12.5" } ] } ] }
//! ```
//!
//! 관측값은 시간순으로 정렬되어 있다고 가정하며, 마지막 원소를 최신값으로
//! 사용합니다. 날짜로 재정렬하지 않습니다.

mod client;

pub use client::{HttpSeriesProvider, DEFAULT_FETCH_TIMEOUT_SECS};

use async_trait::async_trait;
use indicator_core::{IndicatorSpec, Observation, ParseError, RawObservation};
use serde::Deserialize;

use crate::Result;

/// 시계열 제공자 trait.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// 지표의 최신 관측값을 조회합니다.
    ///
    /// # Errors
    ///
    /// - `DataError::HttpStatus` / `DataError::Request`: 조회 실패
    /// - `DataError::Parse`: 응답 구조 또는 관측값 오류
    async fn fetch_latest(&self, spec: &IndicatorSpec) -> Result<Observation>;
}

/// 제공자 응답 최상위 구조.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesEnvelope {
    #[serde(default)]
    pub series: Vec<SeriesBody>,
}

/// 단일 시계열.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesBody {
    #[serde(default)]
    pub observations: Vec<RawObservation>,
}

impl SeriesEnvelope {
    /// 응답 본문을 파싱합니다.
    pub fn parse(body: &str) -> std::result::Result<Self, ParseError> {
        serde_json::from_str(body).map_err(|e| ParseError::MalformedBody(e.to_string()))
    }
}

/// `series[0].observations`의 마지막 원소를 검증하여 반환합니다.
pub fn latest_observation(envelope: &SeriesEnvelope) -> std::result::Result<Observation, ParseError> {
    let raw = envelope
        .series
        .first()
        .and_then(|s| s.observations.last())
        .ok_or(ParseError::NoObservations)?;

    Observation::from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_latest_observation_picks_last() {
        let envelope = SeriesEnvelope::parse(
            r#"{"series":[{"observations":[
                {"period":"2023-01","value":"1.0"},
                {"period":"2023-02","value":"2.0"},
                {"period":"2023-03","value":"3.0"}
            ]}]}"#,
        )
        .unwrap();

        let obs = latest_observation(&envelope).unwrap();
        assert_eq!(obs.value, 3.0);
        assert_eq!(obs.period_date, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
    }

    #[test]
    fn test_latest_observation_does_not_sort() {
        // 순서가 뒤집힌 응답이면 마지막(오래된) 값이 선택됨
        let envelope = SeriesEnvelope::parse(
            r#"{"series":[{"observations":[
                {"period":"2024","value":5},
                {"period":"2020","value":1}
            ]}]}"#,
        )
        .unwrap();

        let obs = latest_observation(&envelope).unwrap();
        assert_eq!(obs.period, "2020");
    }

    #[test]
    fn test_missing_series_is_no_observations() {
        for body in [
            r#"{}"#,
            r#"{"series":[]}"#,
            r#"{"series":[{}]}"#,
            r#"{"series":[{"observations":[]}]}"#,
        ] {
            let envelope = SeriesEnvelope::parse(body).unwrap();
            assert_eq!(
                latest_observation(&envelope),
                Err(ParseError::NoObservations),
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            SeriesEnvelope::parse("<html>oops</html>"),
            Err(ParseError::MalformedBody(_))
        ));
        assert!(matches!(
            SeriesEnvelope::parse(r#"{"series":{"observations":[]}}"#),
            Err(ParseError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_invalid_last_observation() {
        let envelope = SeriesEnvelope::parse(
            r#"{"series":[{"observations":[{"period":"2023","value":"1"},{"period":"2023","value":"NA"}]}]}"#,
        )
        .unwrap();
        assert!(matches!(
            latest_observation(&envelope),
            Err(ParseError::InvalidValue(_))
        ));
    }
}
