//! 수집 대상 지표 카탈로그.
//!
//! 카탈로그는 프로세스 시작 시 한 번 구성되며 실행 중에는 변경되지 않습니다.
//! 기본 카탈로그는 바이너리에 포함되어 있고, TOML 파일로 대체할 수 있습니다.
//!
//! ```toml
//! [[indicators]]
//! macro_angle = "Inflation pressure"
//! name = "Consumer-price index (all items)"
//! code = "PCPI_IX"
//! frequency = "Monthly"
//! endpoint = "https://api.db.nomics.world/v22/series/IMF/IFS.M.ETH.PCPI_IX.json"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::CatalogError;

/// 지표 보고 주기.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// 월간
    Monthly,
    /// 분기
    Quarterly,
    /// 연간
    Annual,
}

impl Frequency {
    /// 저장용 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annual => "Annual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "annual" => Ok(Self::Annual),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

/// 카탈로그 항목 하나 (수집할 경제 지표).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSpec {
    /// 거시 관점 분류 (예: "Inflation pressure")
    pub macro_angle: String,
    /// 사람이 읽을 수 있는 지표명
    pub name: String,
    /// 고유 지표 코드 (저장 키의 일부)
    pub code: String,
    /// 보고 주기
    pub frequency: Frequency,
    /// 시계열 API 엔드포인트 URL
    pub endpoint: String,
}

impl IndicatorSpec {
    /// 새 지표 항목 생성.
    pub fn new(
        macro_angle: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        frequency: Frequency,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            macro_angle: macro_angle.into(),
            name: name.into(),
            code: code.into(),
            frequency,
            endpoint: endpoint.into(),
        }
    }
}

const DBNOMICS_IFS_BASE: &str = "https://api.db.nomics.world/v22/series/IMF/IFS";

fn ifs_endpoint(frequency: Frequency, code: &str) -> String {
    let freq = match frequency {
        Frequency::Monthly => "M",
        Frequency::Quarterly => "Q",
        Frequency::Annual => "A",
    };
    format!("{}.{}.ETH.{}.json", DBNOMICS_IFS_BASE, freq, code)
}

/// 불변 지표 카탈로그.
///
/// 내부적으로 `Arc`를 사용하므로 복제 비용이 낮습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    indicators: Arc<[IndicatorSpec]>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    indicators: Vec<IndicatorSpec>,
}

impl Catalog {
    /// 지표 목록으로 카탈로그 생성 (검증 포함).
    pub fn new(indicators: Vec<IndicatorSpec>) -> Result<Self, CatalogError> {
        if indicators.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for spec in &indicators {
            if spec.code.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    code: spec.name.clone(),
                    field: "code",
                });
            }
            for (field, value) in [
                ("name", &spec.name),
                ("macro_angle", &spec.macro_angle),
                ("endpoint", &spec.endpoint),
            ] {
                if value.trim().is_empty() {
                    return Err(CatalogError::MissingField {
                        code: spec.code.clone(),
                        field,
                    });
                }
            }
            if !seen.insert(spec.code.as_str()) {
                return Err(CatalogError::DuplicateCode(spec.code.clone()));
            }
        }

        Ok(Self {
            indicators: indicators.into(),
        })
    }

    /// 에티오피아 IMF IFS 기본 카탈로그 (5개 지표).
    pub fn reference() -> Self {
        let indicators = vec![
            IndicatorSpec::new(
                "Inflation pressure",
                "Consumer-price index (all items)",
                "PCPI_IX",
                Frequency::Monthly,
                ifs_endpoint(Frequency::Monthly, "PCPI_IX"),
            ),
            IndicatorSpec::new(
                "Growth pulse",
                "Real GDP, y/y % change",
                "NGDP_R_PCH",
                Frequency::Annual,
                ifs_endpoint(Frequency::Annual, "NGDP_R_PCH"),
            ),
            IndicatorSpec::new(
                "Policy stance",
                "National Bank of Ethiopia policy/standing-facility rate",
                "IR_NB_01_PA",
                Frequency::Monthly,
                ifs_endpoint(Frequency::Monthly, "IR_NB_01_PA"),
            ),
            IndicatorSpec::new(
                "Currency health",
                "ETB per USD, period-average",
                "ENDA_XDC_USD_RATE",
                Frequency::Monthly,
                ifs_endpoint(Frequency::Monthly, "ENDA_XDC_USD_RATE"),
            ),
            IndicatorSpec::new(
                "External sustainability",
                "Current-account balance (US $)",
                "BCA_USD",
                Frequency::Annual,
                ifs_endpoint(Frequency::Annual, "BCA_USD"),
            ),
        ];

        Self {
            indicators: indicators.into(),
        }
    }

    /// TOML 파일에서 카탈로그를 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file: CatalogFile = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?
            .try_deserialize()?;

        Self::new(file.indicators)
    }

    /// 경로가 주어지면 파일에서, 아니면 기본 카탈로그를 반환합니다.
    pub fn load_or_reference<P: AsRef<Path>>(path: Option<P>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::reference()),
        }
    }

    /// 카탈로그 순서대로 순회.
    pub fn iter(&self) -> std::slice::Iter<'_, IndicatorSpec> {
        self.indicators.iter()
    }

    /// 지표 개수.
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// 비어 있는지 여부 (검증된 카탈로그는 항상 false).
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// 코드로 지표 조회.
    pub fn get(&self, code: &str) -> Option<&IndicatorSpec> {
        self.indicators.iter().find(|spec| spec.code == code)
    }

    /// 슬라이스로 반환.
    pub fn as_slice(&self) -> &[IndicatorSpec] {
        &self.indicators
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a IndicatorSpec;
    type IntoIter = std::slice::Iter<'a, IndicatorSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
