//! 시계열 관측값 검증 및 정규화.
//!
//! 제공자의 관측값은 `period`(문자열)와 `value`(문자열 또는 숫자)로 느슨하게
//! 타입이 지정되어 있습니다. 이 모듈은 원시 관측값을 검증된 [`Observation`]
//! 또는 [`ParseError`]로 변환합니다.
//!
//! # 기간 정규화 규칙
//!
//! | 입력 | 결과 |
//! |------|------|
//! | `2023` | `2023-01-01` |
//! | `2023-07` | `2023-07-01` |
//! | `2023-07-15` | `2023-07-15` |
//! | 그 외 | `ParseError::InvalidPeriod` |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;

/// 제공자 응답의 원시 관측값.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawObservation {
    /// 제공자 고유 기간 문자열
    #[serde(default)]
    pub period: Value,
    /// 값 (문자열 또는 숫자)
    #[serde(default)]
    pub value: Value,
}

/// 검증된 관측값.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// 원본 기간 문자열
    pub period: String,
    /// 관측값
    pub value: f64,
    /// 정규화된 날짜
    pub period_date: NaiveDate,
}

impl Observation {
    /// 원시 관측값을 검증하여 변환합니다.
    pub fn from_raw(raw: &RawObservation) -> Result<Self, ParseError> {
        let period = match &raw.period {
            Value::String(s) => s.clone(),
            // 일부 제공자는 연도를 숫자로 반환
            Value::Number(n) if n.is_u64() => n.to_string(),
            other => return Err(ParseError::InvalidPeriod(other.to_string())),
        };

        let period_date = normalize_period(&period)?;
        let value = parse_value(&raw.value)?;

        Ok(Self {
            period,
            value,
            period_date,
        })
    }

    /// 기간과 값으로 직접 생성합니다.
    pub fn new(period: impl Into<String>, value: f64) -> Result<Self, ParseError> {
        let period = period.into();
        if !value.is_finite() {
            return Err(ParseError::InvalidValue(value.to_string()));
        }
        let period_date = normalize_period(&period)?;
        Ok(Self {
            period,
            value,
            period_date,
        })
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// 기간 문자열을 달력 날짜로 정규화합니다.
///
/// 형태가 맞더라도 존재하지 않는 날짜(`2023-13`, `2023-02-30`)는 거부합니다.
pub fn normalize_period(period: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidPeriod(period.to_string());

    let full = match period.len() {
        4 if all_digits(period) => format!("{}-01-01", period),
        7 if period.as_bytes()[4] == b'-'
            && all_digits(&period[..4])
            && all_digits(&period[5..]) =>
        {
            format!("{}-01", period)
        }
        10 if period.as_bytes()[4] == b'-'
            && period.as_bytes()[7] == b'-'
            && all_digits(&period[..4])
            && all_digits(&period[5..7])
            && all_digits(&period[8..]) =>
        {
            period.to_string()
        }
        _ => return Err(invalid()),
    };

    NaiveDate::parse_from_str(&full, "%Y-%m-%d").map_err(|_| invalid())
}

/// 값을 부동소수점으로 파싱합니다.
///
/// 숫자 또는 숫자 문자열만 허용하며, NaN/무한대는 거부합니다.
pub fn parse_value(raw: &Value) -> Result<f64, ParseError> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidValue(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_year() {
        assert_eq!(normalize_period("2023").unwrap(), date(2023, 1, 1));
    }

    #[test]
    fn test_normalize_year_month() {
        assert_eq!(normalize_period("2023-07").unwrap(), date(2023, 7, 1));
    }

    #[test]
    fn test_normalize_full_date_unchanged() {
        let d = normalize_period("2023-07-15").unwrap();
        assert_eq!(d, date(2023, 7, 15));
        assert_eq!(d.format("%Y-%m-%d").to_string(), "2023-07-15");
    }

    #[test]
    fn test_normalize_rejects_other_shapes() {
        for bad in [
            "", "23", "2023-7", "2023/07", "2023-Q1", "2023-07-1", "2023-07-15T00:00", "abcd",
            " 2023",
        ] {
            assert_eq!(
                normalize_period(bad),
                Err(ParseError::InvalidPeriod(bad.to_string())),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_normalize_rejects_impossible_dates() {
        assert!(normalize_period("2023-13").is_err());
        assert!(normalize_period("2023-02-30").is_err());
        assert!(normalize_period("2023-00").is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(&json!("12.5")).unwrap(), 12.5);
        assert_eq!(parse_value(&json!(" -3 ")).unwrap(), -3.0);
        assert_eq!(parse_value(&json!(42)).unwrap(), 42.0);
        assert_eq!(parse_value(&json!(1.25e3)).unwrap(), 1250.0);
    }

    #[test]
    fn test_parse_value_rejects_non_numeric() {
        for bad in [json!("NA"), json!(""), json!(null), json!(true), json!("NaN"), json!("inf")] {
            assert!(
                matches!(parse_value(&bad), Err(ParseError::InvalidValue(_))),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_observation_from_raw() {
        let raw = RawObservation {
            period: json!("2024-03"),
            value: json!("12.5"),
        };
        let obs = Observation::from_raw(&raw).unwrap();
        assert_eq!(obs.period, "2024-03");
        assert_eq!(obs.value, 12.5);
        assert_eq!(obs.period_date, date(2024, 3, 1));
    }

    #[test]
    fn test_observation_from_raw_numeric_year() {
        let raw = RawObservation {
            period: json!(2022),
            value: json!(6.1),
        };
        let obs = Observation::from_raw(&raw).unwrap();
        assert_eq!(obs.period_date, date(2022, 1, 1));
    }

    #[test]
    fn test_observation_from_raw_missing_fields() {
        let raw: RawObservation = serde_json::from_value(json!({ "value": "1.0" })).unwrap();
        assert!(matches!(
            Observation::from_raw(&raw),
            Err(ParseError::InvalidPeriod(_))
        ));

        let raw: RawObservation = serde_json::from_value(json!({ "period": "2023" })).unwrap();
        assert!(matches!(
            Observation::from_raw(&raw),
            Err(ParseError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_observation_new_rejects_nan() {
        assert!(Observation::new("2023", f64::NAN).is_err());
        assert!(Observation::new("2023", 1.0).is_ok());
    }
}
