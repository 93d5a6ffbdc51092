//! 이력/계산 기록의 CSV 내보내기.

use crate::ledger::{CalculationRecord, ConversionRecord};

/// 변환 이력을 CSV 텍스트로 만든다.
pub fn history_csv(records: &[ConversionRecord]) -> String {
    let mut out = String::from("id,createdAt,inputValue,fromUnit,result,toUnit,category\n");
    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            r.id,
            csv_field(&r.created_at),
            r.input_value,
            csv_field(&r.from_unit),
            r.result,
            csv_field(&r.to_unit),
            r.category.as_str(),
        ));
    }
    out
}

/// 계산 이력을 CSV 텍스트로 만든다. 입력/출력 맵은 `k=v; k=v` 형태의
/// 단일 필드로 펼친다.
pub fn calculations_csv(records: &[CalculationRecord]) -> String {
    let mut out = String::from("id,kind,timestamp,userId,inputs,outputs\n");
    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            r.id,
            r.kind.as_str(),
            csv_field(&r.timestamp),
            csv_field(&r.user_id),
            csv_field(&join_fields(&r.inputs)),
            csv_field(&join_fields(&r.outputs)),
        ));
    }
    out
}

fn join_fields(map: &std::collections::BTreeMap<String, f64>) -> String {
    map.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("; ")
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
