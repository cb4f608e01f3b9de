//! # Indicator Core
//!
//! 경제 지표 수집기의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 수집기 전반에서 사용되는 기본 타입을 제공합니다:
//! - 지표 카탈로그 (IndicatorSpec)
//! - 관측값 검증 및 기간 정규화 (Observation)
//! - 저장 레코드 및 수집 로그 타입
//! - 로깅 인프라

pub mod catalog;
pub mod error;
pub mod logging;
pub mod observation;
pub mod record;

pub use catalog::*;
pub use error::*;
pub use logging::*;
pub use observation::*;
pub use record::*;
