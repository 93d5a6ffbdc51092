use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::catalog::Category;
use crate::ledger::{CalculationKind, CalculationRecord, ConversionRecord};

/// 호스트 채널로 내보내는 액션 태그 페이로드. 필드명은 저장/전송 포맷의
/// 일부이므로 바꾸지 않는다.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ResultPayload {
    #[serde(rename_all = "camelCase")]
    Conversion {
        value: f64,
        from_unit: String,
        converted_value: f64,
        to_unit: String,
        category: Category,
        timestamp: String,
    },
    #[serde(rename_all = "camelCase")]
    Calculation {
        kind: CalculationKind,
        outputs: BTreeMap<String, f64>,
        timestamp: String,
    },
}

impl ResultPayload {
    pub fn from_conversion(record: &ConversionRecord) -> Self {
        ResultPayload::Conversion {
            value: record.input_value,
            from_unit: record.from_unit.clone(),
            converted_value: record.result,
            to_unit: record.to_unit.clone(),
            category: record.category,
            timestamp: record.created_at.clone(),
        }
    }

    pub fn from_calculation(record: &CalculationRecord) -> Self {
        ResultPayload::Calculation {
            kind: record.kind,
            outputs: record.outputs.clone(),
            timestamp: record.timestamp.clone(),
        }
    }
}

/// 호스트 전송 시 발생 가능한 오류.
#[derive(Debug)]
pub enum HostError {
    /// 채널 쓰기 오류
    Io(io::Error),
    /// 페이로드 직렬화 오류
    Encode(serde_json::Error),
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::Io(e) => write!(f, "호스트 채널 쓰기 오류: {e}"),
            HostError::Encode(e) => write!(f, "페이로드 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for HostError {}

impl From<io::Error> for HostError {
    fn from(value: io::Error) -> Self {
        HostError::Io(value)
    }
}

impl From<serde_json::Error> for HostError {
    fn from(value: serde_json::Error) -> Self {
        HostError::Encode(value)
    }
}

/// 채팅 호스트로의 단방향 전송 경계. 응답은 기다리지 않는다.
pub trait HostChannel {
    fn send(&mut self, payload: &ResultPayload) -> Result<(), HostError>;
}

/// 페이로드를 JSON 한 줄로 쓰는 채널 구현.
#[derive(Debug)]
pub struct JsonLineChannel<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineChannel<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> HostChannel for JsonLineChannel<W> {
    fn send(&mut self, payload: &ResultPayload) -> Result<(), HostError> {
        let json = serde_json::to_string(payload)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// 표준 출력으로 보내는 기본 채널.
pub fn stdout_channel() -> JsonLineChannel<io::Stdout> {
    JsonLineChannel::new(io::stdout())
}
