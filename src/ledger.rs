use std::collections::BTreeMap;

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::storage::{keys, Storage, StorageError};

/// 변환 이력 최대 보관 건수. 초과분은 오래된 것부터 밀려난다.
pub const HISTORY_CAPACITY: usize = 10;
/// 공학 계산 이력 최대 보관 건수.
pub const CALCULATION_CAPACITY: usize = 200;

/// 성공한 단위 변환 1건의 불변 기록.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    /// 단조 증가하는 밀리초 타임스탬프
    pub id: i64,
    pub created_at: String,
    pub input_value: f64,
    pub from_unit: String,
    pub result: f64,
    pub to_unit: String,
    pub category: Category,
}

/// 공학 계산 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    SeparatorBlowdown,
    CompressorStartup,
    FlowMeasurement,
    PipelineInventory,
}

impl CalculationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationKind::SeparatorBlowdown => "separator_blowdown",
            CalculationKind::CompressorStartup => "compressor_startup",
            CalculationKind::FlowMeasurement => "flow_measurement",
            CalculationKind::PipelineInventory => "pipeline_inventory",
        }
    }
}

/// 성공한 공학 계산 1건의 불변 기록. 입력과 출력은 이름 붙은 수치 필드다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    /// 단조 증가하는 밀리초 타임스탬프
    pub id: i64,
    pub kind: CalculationKind,
    pub inputs: BTreeMap<String, f64>,
    pub outputs: BTreeMap<String, f64>,
    /// RFC 3339 시각
    pub timestamp: String,
    pub user_id: String,
}

/// 원장 조작 시 발생 가능한 오류.
#[derive(Debug)]
pub enum LedgerError {
    /// 이력/즐겨찾기에 해당 id가 없음
    NotFound(i64),
    /// 이미 즐겨찾기에 있는 id
    AlreadyFavorite(i64),
    /// 저장소 접근 실패
    Storage(StorageError),
    /// 기록 직렬화 실패
    Encode(serde_json::Error),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::NotFound(id) => write!(f, "기록을 찾을 수 없음: {id}"),
            LedgerError::AlreadyFavorite(id) => write!(f, "이미 즐겨찾기에 있음: {id}"),
            LedgerError::Storage(e) => write!(f, "저장소 오류: {e}"),
            LedgerError::Encode(e) => write!(f, "기록 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<StorageError> for LedgerError {
    fn from(value: StorageError) -> Self {
        LedgerError::Storage(value)
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(value: serde_json::Error) -> Self {
        LedgerError::Encode(value)
    }
}

/// 재수화 중 발견한 문제. 키가 없는 경우와 달리 손상된 JSON은
/// 빈 목록으로 대체하되 호출부가 알 수 있게 보고한다.
#[derive(Debug)]
pub struct LoadIssue {
    pub key: &'static str,
    pub detail: String,
}

/// 변환 이력/즐겨찾기와 계산 이력을 관리하는 원장.
/// 모든 변경은 이 타입의 메서드를 통해서만 일어나고, 변경 직후 저장소에
/// 전체를 다시 쓴다 (단일 탭 단일 사용자 전제의 last-writer-wins).
#[derive(Debug)]
pub struct Ledger<S: Storage> {
    storage: S,
    history: Vec<ConversionRecord>,
    favorites: Vec<ConversionRecord>,
    calculations: Vec<CalculationRecord>,
    last_id: i64,
}

impl<S: Storage> Ledger<S> {
    /// 저장소에서 원장을 재수화한다. 없는 키는 빈 목록, 손상된 키는
    /// 빈 목록 + LoadIssue로 처리한다.
    pub fn load(storage: S) -> Result<(Self, Vec<LoadIssue>), StorageError> {
        let mut issues = Vec::new();
        let history =
            load_list::<ConversionRecord, _>(&storage, keys::HISTORY, &mut issues)?;
        let favorites =
            load_list::<ConversionRecord, _>(&storage, keys::FAVORITES, &mut issues)?;
        let calculations =
            load_list::<CalculationRecord, _>(&storage, keys::CALCULATIONS, &mut issues)?;
        let last_id = history
            .iter()
            .map(|r| r.id)
            .chain(favorites.iter().map(|r| r.id))
            .chain(calculations.iter().map(|r| r.id))
            .max()
            .unwrap_or(0);
        Ok((
            Self {
                storage,
                history,
                favorites,
                calculations,
                last_id,
            },
            issues,
        ))
    }

    pub fn history(&self) -> &[ConversionRecord] {
        &self.history
    }

    pub fn favorites(&self) -> &[ConversionRecord] {
        &self.favorites
    }

    pub fn calculations(&self) -> &[CalculationRecord] {
        &self.calculations
    }

    pub(crate) fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// 이전에 발급한 id보다 항상 큰 밀리초 타임스탬프 id를 발급한다.
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    /// 변환 기록을 생성한다. 기록 자체는 별도의 record_conversion 호출로
    /// 원장에 들어간다 (계산과 기록의 분리).
    pub fn new_conversion(
        &mut self,
        category: Category,
        input_value: f64,
        from_unit: &str,
        result: f64,
        to_unit: &str,
    ) -> ConversionRecord {
        ConversionRecord {
            id: self.next_id(),
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_value,
            from_unit: from_unit.to_string(),
            result,
            to_unit: to_unit.to_string(),
            category,
        }
    }

    /// 계산 기록을 생성한다. user_id가 없으면 "anonymous"로 둔다.
    pub fn new_calculation(
        &mut self,
        kind: CalculationKind,
        inputs: BTreeMap<String, f64>,
        outputs: BTreeMap<String, f64>,
        user_id: Option<&str>,
    ) -> CalculationRecord {
        CalculationRecord {
            id: self.next_id(),
            kind,
            inputs,
            outputs,
            timestamp: Utc::now().to_rfc3339(),
            user_id: user_id.unwrap_or("anonymous").to_string(),
        }
    }

    /// 변환 기록을 이력 맨 앞에 넣고 정원 초과분을 버린 뒤 저장한다.
    pub fn record_conversion(&mut self, record: ConversionRecord) -> Result<(), LedgerError> {
        self.history.insert(0, record);
        self.history.truncate(HISTORY_CAPACITY);
        self.persist_history()
    }

    /// 계산 기록을 이력 맨 앞에 넣고 정원 초과분을 버린 뒤 저장한다.
    pub fn record_calculation(&mut self, record: CalculationRecord) -> Result<(), LedgerError> {
        self.calculations.insert(0, record);
        self.calculations.truncate(CALCULATION_CAPACITY);
        self.persist_calculations()
    }

    /// 이력 항목을 즐겨찾기로 승격한다. 이력 항목은 그대로 남는다(복사).
    pub fn promote_to_favorite(&mut self, id: i64) -> Result<(), LedgerError> {
        if self.favorites.iter().any(|r| r.id == id) {
            return Err(LedgerError::AlreadyFavorite(id));
        }
        let record = self
            .history
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(LedgerError::NotFound(id))?;
        self.favorites.insert(0, record);
        self.persist_favorites()
    }

    /// 즐겨찾기 항목을 조회한다. 활성 폼으로의 재생(카테고리 전환,
    /// 필드 채움, 재변환)은 호출부 책임이다.
    pub fn recall_favorite(&self, id: i64) -> Result<&ConversionRecord, LedgerError> {
        self.favorites
            .iter()
            .find(|r| r.id == id)
            .ok_or(LedgerError::NotFound(id))
    }

    /// 변환 이력과 그 영속 사본을 비운다. 즐겨찾기는 건드리지 않는다.
    /// 파괴적 동작이므로 사용자 확인은 호출부(UI)에서 받는다.
    pub fn clear_history(&mut self) -> Result<(), LedgerError> {
        self.history.clear();
        self.storage.remove(keys::HISTORY)?;
        Ok(())
    }

    fn persist_history(&mut self) -> Result<(), LedgerError> {
        let json = serde_json::to_string(&self.history)?;
        self.storage.set(keys::HISTORY, &json)?;
        Ok(())
    }

    fn persist_favorites(&mut self) -> Result<(), LedgerError> {
        let json = serde_json::to_string(&self.favorites)?;
        self.storage.set(keys::FAVORITES, &json)?;
        Ok(())
    }

    fn persist_calculations(&mut self) -> Result<(), LedgerError> {
        let json = serde_json::to_string(&self.calculations)?;
        self.storage.set(keys::CALCULATIONS, &json)?;
        Ok(())
    }
}

/// 이름-값 쌍 목록을 기록용 필드 맵으로 만든다.
pub fn fields(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn load_list<T: serde::de::DeserializeOwned, S: Storage>(
    storage: &S,
    key: &'static str,
    issues: &mut Vec<LoadIssue>,
) -> Result<Vec<T>, StorageError> {
    match storage.get(key)? {
        None => Ok(Vec::new()),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                issues.push(LoadIssue {
                    key,
                    detail: e.to_string(),
                });
                Ok(Vec::new())
            }
        },
    }
}
