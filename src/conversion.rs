use crate::catalog::{find_unit, Category, Strategy};
use crate::rates::{RateSource, StaticRateTable};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 카테고리에 없는 단위 식별자
    UnknownUnit(String),
    /// 선형 카테고리 단위에 배율이 없음
    MissingFactor(String),
    /// 직접/역방향 어느 쪽으로도 환율이 없는 통화쌍
    MissingRate { from: String, to: String },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::MissingFactor(u) => write!(f, "변환 배율이 없는 단위: {u}"),
            ConversionError::MissingRate { from, to } => {
                write!(f, "환율 없음: {from} → {to}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 카테고리 전략에 따라 값을 변환한다. 통화는 내장 정적 테이블을 쓴다.
pub fn convert(
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    convert_with_rates(category, value, from, to, &StaticRateTable::builtin())
}

/// 환율 소스를 주입받는 변형. 실시간 환율 구현을 붙일 때 사용한다.
pub fn convert_with_rates(
    category: Category,
    value: f64,
    from: &str,
    to: &str,
    rates: &dyn RateSource,
) -> Result<f64, ConversionError> {
    match category.strategy() {
        Strategy::LinearFactor => convert_linear(category, value, from, to),
        Strategy::AffineTemperature => convert_temperature(value, from, to),
        Strategy::ExchangeRate => convert_currency(category, value, from, to, rates),
    }
}

/// 기준 단위를 거치는 배율 환산.
fn convert_linear(
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    let from_factor = linear_factor(category, from)?;
    let to_factor = linear_factor(category, to)?;
    Ok(value * from_factor / to_factor)
}

fn linear_factor(category: Category, id: &str) -> Result<f64, ConversionError> {
    let unit =
        find_unit(category, id).ok_or_else(|| ConversionError::UnknownUnit(id.to_string()))?;
    unit.factor
        .ok_or_else(|| ConversionError::MissingFactor(id.to_string()))
}

/// 섭씨를 피벗으로 하는 2단 온도 변환.
fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let celsius = to_celsius(value, from)?;
    from_celsius(celsius, to)
}

fn to_celsius(value: f64, unit: &str) -> Result<f64, ConversionError> {
    match unit {
        "c" => Ok(value),
        "f" => Ok((value - 32.0) * 5.0 / 9.0),
        "k" => Ok(value - 273.15),
        _ => Err(ConversionError::UnknownUnit(unit.to_string())),
    }
}

fn from_celsius(celsius: f64, unit: &str) -> Result<f64, ConversionError> {
    match unit {
        "c" => Ok(celsius),
        "f" => Ok(celsius * 9.0 / 5.0 + 32.0),
        "k" => Ok(celsius + 273.15),
        _ => Err(ConversionError::UnknownUnit(unit.to_string())),
    }
}

/// 통화 변환. 같은 통화는 그대로, 직접쌍이 없으면 역방향 쌍으로 나눈다.
fn convert_currency(
    category: Category,
    value: f64,
    from: &str,
    to: &str,
    rates: &dyn RateSource,
) -> Result<f64, ConversionError> {
    if find_unit(category, from).is_none() {
        return Err(ConversionError::UnknownUnit(from.to_string()));
    }
    if find_unit(category, to).is_none() {
        return Err(ConversionError::UnknownUnit(to.to_string()));
    }
    if from == to {
        return Ok(value);
    }
    if let Some(rate) = rates.rate(from, to) {
        return Ok(value * rate);
    }
    if let Some(inverse) = rates.rate(to, from) {
        return Ok(value / inverse);
    }
    Err(ConversionError::MissingRate {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// 표시용 반올림. 일반 변환은 소수 6자리 후 후행 0 제거, 통화는 2자리 고정.
pub fn format_result(category: Category, value: f64) -> String {
    if category == Category::Currency {
        return format!("{value:.2}");
    }
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
