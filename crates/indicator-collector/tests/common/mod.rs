//! 통합 테스트 공용 fake 구현.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use indicator_core::{
    Catalog, CollectionLogEntry, Frequency, IndicatorRecord, IndicatorSpec, NewCollectionLog,
    Observation,
};
use indicator_data::{DataError, IndicatorStore, Result, SeriesProvider};

/// 코드별로 미리 정한 응답을 순서대로 돌려주는 provider.
///
/// 스크립트가 비어 있으면 `2024-01` / `1.0` 관측값을 반환합니다.
#[derive(Default)]
pub struct ScriptedProvider {
    scripts: Mutex<HashMap<String, VecDeque<Result<Observation>>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, code: &str, response: Result<Observation>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(code.to_string())
            .or_default()
            .push_back(response);
    }

    /// 호출된 지표 코드 (호출 순서).
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, code: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == code).count()
    }
}

#[async_trait]
impl SeriesProvider for ScriptedProvider {
    async fn fetch_latest(&self, spec: &IndicatorSpec) -> Result<Observation> {
        self.calls.lock().unwrap().push(spec.code.clone());

        let scripted = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&spec.code)
            .and_then(|queue| queue.pop_front());

        scripted.unwrap_or_else(|| Ok(observation("2024-01", 1.0)))
    }
}

/// 메모리 저장소.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<(String, NaiveDate), IndicatorRecord>>,
    logs: Mutex<Vec<CollectionLogEntry>>,
    failing_upserts: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 다음 `n`번의 UPSERT를 실패시킵니다.
    pub fn fail_next_upserts(&self, n: usize) {
        *self.failing_upserts.lock().unwrap() = n;
    }

    pub fn records(&self) -> Vec<IndicatorRecord> {
        self.records.lock().unwrap().values().cloned().collect()
    }

    pub fn record(&self, code: &str, period_date: NaiveDate) -> Option<IndicatorRecord> {
        self.records
            .lock()
            .unwrap()
            .get(&(code.to_string(), period_date))
            .cloned()
    }

    pub fn logs(&self) -> Vec<CollectionLogEntry> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl IndicatorStore for MemoryStore {
    async fn upsert_indicator(
        &self,
        spec: &IndicatorSpec,
        observation: &Observation,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        {
            let mut failing = self.failing_upserts.lock().unwrap();
            if *failing > 0 {
                *failing -= 1;
                return Err(DataError::Storage("database is locked".to_string()));
            }
        }

        let record = IndicatorRecord {
            indicator_name: spec.name.clone(),
            indicator_code: spec.code.clone(),
            macro_angle: spec.macro_angle.clone(),
            value: observation.value,
            period_date: observation.period_date,
            frequency: spec.frequency.as_str().to_string(),
            updated_at,
        };
        self.records
            .lock()
            .unwrap()
            .insert((spec.code.clone(), observation.period_date), record);
        Ok(())
    }

    async fn insert_collection_log(&self, log: &NewCollectionLog) -> Result<i64> {
        let mut logs = self.logs.lock().unwrap();
        let id = logs.len() as i64 + 1;
        logs.push(CollectionLogEntry {
            id,
            collection_date: log.collection_date,
            total_indicators: log.total_indicators,
            successful_collections: log.successful_collections,
            failed_collections: log.failed_collections,
            error_details: log.error_details.clone(),
            execution_duration_ms: log.execution_duration_ms,
        });
        Ok(id)
    }

    async fn recent_indicators(&self, limit: i64) -> Result<Vec<IndicatorRecord>> {
        let mut records = self.records();
        records.sort_by(|a, b| {
            b.period_date
                .cmp(&a.period_date)
                .then_with(|| a.indicator_code.cmp(&b.indicator_code))
        });
        records.truncate(limit as usize);
        Ok(records)
    }

    async fn recent_logs(&self, limit: i64) -> Result<Vec<CollectionLogEntry>> {
        let mut logs = self.logs();
        logs.reverse();
        logs.truncate(limit as usize);
        Ok(logs)
    }

    async fn latest_per_indicator(&self) -> Result<Vec<IndicatorRecord>> {
        let mut latest: HashMap<String, IndicatorRecord> = HashMap::new();
        for record in self.records() {
            match latest.get(&record.indicator_code) {
                Some(existing) if existing.period_date >= record.period_date => {}
                _ => {
                    latest.insert(record.indicator_code.clone(), record);
                }
            }
        }
        let mut records: Vec<_> = latest.into_values().collect();
        records.sort_by(|a, b| a.indicator_code.cmp(&b.indicator_code));
        Ok(records)
    }
}

/// 조회가 항상 실패하는 저장소.
pub struct BrokenStore;

#[async_trait]
impl IndicatorStore for BrokenStore {
    async fn upsert_indicator(
        &self,
        _spec: &IndicatorSpec,
        _observation: &Observation,
        _updated_at: DateTime<Utc>,
    ) -> Result<()> {
        Err(broken())
    }

    async fn insert_collection_log(&self, _log: &NewCollectionLog) -> Result<i64> {
        Err(broken())
    }

    async fn recent_indicators(&self, _limit: i64) -> Result<Vec<IndicatorRecord>> {
        Err(broken())
    }

    async fn recent_logs(&self, _limit: i64) -> Result<Vec<CollectionLogEntry>> {
        Err(broken())
    }

    async fn latest_per_indicator(&self) -> Result<Vec<IndicatorRecord>> {
        Err(broken())
    }
}

fn broken() -> DataError {
    DataError::Storage("unable to open database file".to_string())
}

pub fn observation(period: &str, value: f64) -> Observation {
    Observation::new(period, value).unwrap()
}

pub fn spec(code: &str, endpoint: &str) -> IndicatorSpec {
    IndicatorSpec::new(
        "Test angle",
        format!("Indicator {}", code),
        code,
        Frequency::Monthly,
        endpoint,
    )
}

/// 주어진 코드들로 카탈로그 생성 (엔드포인트는 사용되지 않음).
pub fn catalog(codes: &[&str]) -> Catalog {
    Catalog::new(
        codes
            .iter()
            .map(|code| spec(code, &format!("http://series.invalid/{}", code)))
            .collect(),
    )
    .unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
