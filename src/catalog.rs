use serde::{Deserialize, Serialize};

/// 다루는 변환 카테고리를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
    Speed,
    Time,
    Currency,
}

/// 카테고리별 변환 전략.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// 기준 단위에 대한 배율 환산
    LinearFactor,
    /// 섭씨를 피벗으로 하는 아핀 변환
    AffineTemperature,
    /// 통화쌍 환율 테이블 조회
    ExchangeRate,
}

/// 단위 정의. `factor`는 카테고리 기준 단위에 대한 배율이며
/// 온도/통화 카테고리에서는 None이다.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub name: &'static str,
    pub id: &'static str,
    pub factor: Option<f64>,
}

impl UnitDef {
    const fn linear(name: &'static str, id: &'static str, factor: f64) -> Self {
        Self {
            name,
            id,
            factor: Some(factor),
        }
    }

    const fn raw(name: &'static str, id: &'static str) -> Self {
        Self {
            name,
            id,
            factor: None,
        }
    }
}

/// 자주 쓰는 변환 쌍(빠른 변환 버튼용).
#[derive(Debug, Clone, Copy)]
pub struct QuickConversion {
    pub from: &'static str,
    pub to: &'static str,
    pub label: &'static str,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Area,
        Category::Speed,
        Category::Time,
        Category::Currency,
    ];

    pub fn strategy(&self) -> Strategy {
        match self {
            Category::Temperature => Strategy::AffineTemperature,
            Category::Currency => Strategy::ExchangeRate,
            _ => Strategy::LinearFactor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Area => "area",
            Category::Speed => "speed",
            Category::Time => "time",
            Category::Currency => "currency",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        let c = s.trim().to_lowercase();
        Category::ALL.iter().copied().find(|cat| cat.as_str() == c)
    }

    /// 카테고리가 소유한 단위 목록을 정의 순서대로 반환한다.
    pub fn units(&self) -> &'static [UnitDef] {
        match self {
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Temperature => TEMPERATURE_UNITS,
            Category::Volume => VOLUME_UNITS,
            Category::Area => AREA_UNITS,
            Category::Speed => SPEED_UNITS,
            Category::Time => TIME_UNITS,
            Category::Currency => CURRENCY_UNITS,
        }
    }

    /// 빠른 변환 프리셋. 없는 카테고리는 빈 슬라이스.
    pub fn quick_conversions(&self) -> &'static [QuickConversion] {
        match self {
            Category::Length => LENGTH_QUICK,
            Category::Weight => WEIGHT_QUICK,
            Category::Temperature => TEMPERATURE_QUICK,
            _ => &[],
        }
    }
}

/// 단위 식별자로 단위 정의를 찾는다.
pub fn find_unit(category: Category, id: &str) -> Option<&'static UnitDef> {
    category.units().iter().find(|u| u.id == id)
}

/// 카테고리 전환 시 기본 선택 쌍(인덱스 0, 1). 단위가 2개 미만이면 None.
pub fn default_pair(category: Category) -> Option<(&'static UnitDef, &'static UnitDef)> {
    let units = category.units();
    if units.len() >= 2 {
        Some((&units[0], &units[1]))
    } else {
        None
    }
}

/// 테이블 구성 오류를 점검한다. 선형 카테고리의 factor 누락이나
/// 카테고리 내 식별자 중복은 프로그래밍 오류이므로 즉시 드러나야 한다.
pub fn validate_tables() -> Result<(), String> {
    for category in Category::ALL {
        let units = category.units();
        for (i, unit) in units.iter().enumerate() {
            if category.strategy() == Strategy::LinearFactor && unit.factor.is_none() {
                return Err(format!(
                    "{}: unit '{}' has no conversion factor",
                    category.as_str(),
                    unit.id
                ));
            }
            if let Some(f) = unit.factor {
                if !(f > 0.0) {
                    return Err(format!(
                        "{}: unit '{}' has non-positive factor {f}",
                        category.as_str(),
                        unit.id
                    ));
                }
            }
            if units[..i].iter().any(|u| u.id == unit.id) {
                return Err(format!(
                    "{}: duplicate unit identifier '{}'",
                    category.as_str(),
                    unit.id
                ));
            }
        }
    }
    Ok(())
}

// 기준 단위: 길이 m, 무게 kg, 체적 L, 면적 m2, 속도 m/s, 시간 s.
const LENGTH_UNITS: &[UnitDef] = &[
    UnitDef::linear("meter", "m", 1.0),
    UnitDef::linear("kilometer", "km", 1000.0),
    UnitDef::linear("centimeter", "cm", 0.01),
    UnitDef::linear("millimeter", "mm", 0.001),
    UnitDef::linear("mile", "mile", 1609.34),
    UnitDef::linear("yard", "yard", 0.9144),
    UnitDef::linear("foot", "foot", 0.3048),
    UnitDef::linear("inch", "inch", 0.0254),
];

const WEIGHT_UNITS: &[UnitDef] = &[
    UnitDef::linear("kilogram", "kg", 1.0),
    UnitDef::linear("gram", "g", 0.001),
    UnitDef::linear("pound", "lb", 0.453592),
    UnitDef::linear("ounce", "oz", 0.0283495),
    UnitDef::linear("tonne", "ton", 1000.0),
    UnitDef::linear("carat", "carat", 0.0002),
];

const TEMPERATURE_UNITS: &[UnitDef] = &[
    UnitDef::raw("Celsius", "c"),
    UnitDef::raw("Fahrenheit", "f"),
    UnitDef::raw("Kelvin", "k"),
];

const VOLUME_UNITS: &[UnitDef] = &[
    UnitDef::linear("liter", "l", 1.0),
    UnitDef::linear("milliliter", "ml", 0.001),
    UnitDef::linear("cubic meter", "m3", 1000.0),
    UnitDef::linear("gallon", "gallon", 3.78541),
    UnitDef::linear("pint", "pint", 0.473176),
];

const AREA_UNITS: &[UnitDef] = &[
    UnitDef::linear("square meter", "m2", 1.0),
    UnitDef::linear("square kilometer", "km2", 1_000_000.0),
    UnitDef::linear("hectare", "ha", 10_000.0),
    UnitDef::linear("acre", "acre", 4046.86),
    UnitDef::linear("are (sotka)", "sotka", 100.0),
];

const SPEED_UNITS: &[UnitDef] = &[
    UnitDef::linear("meter/second", "m/s", 1.0),
    UnitDef::linear("kilometer/hour", "km/h", 0.277778),
    UnitDef::linear("mile/hour", "mph", 0.44704),
    UnitDef::linear("knot", "knot", 0.514444),
];

const TIME_UNITS: &[UnitDef] = &[
    UnitDef::linear("second", "s", 1.0),
    UnitDef::linear("minute", "min", 60.0),
    UnitDef::linear("hour", "h", 3600.0),
    UnitDef::linear("day", "day", 86_400.0),
    UnitDef::linear("week", "week", 604_800.0),
];

const CURRENCY_UNITS: &[UnitDef] = &[
    UnitDef::raw("Ruble (RUB)", "RUB"),
    UnitDef::raw("Dollar (USD)", "USD"),
    UnitDef::raw("Euro (EUR)", "EUR"),
    UnitDef::raw("Pound (GBP)", "GBP"),
    UnitDef::raw("Yen (JPY)", "JPY"),
];

const LENGTH_QUICK: &[QuickConversion] = &[
    QuickConversion {
        from: "km",
        to: "mile",
        label: "km → mile",
    },
    QuickConversion {
        from: "m",
        to: "foot",
        label: "m → ft",
    },
    QuickConversion {
        from: "cm",
        to: "inch",
        label: "cm → in",
    },
];

const WEIGHT_QUICK: &[QuickConversion] = &[
    QuickConversion {
        from: "kg",
        to: "lb",
        label: "kg → lb",
    },
    QuickConversion {
        from: "g",
        to: "oz",
        label: "g → oz",
    },
];

const TEMPERATURE_QUICK: &[QuickConversion] = &[QuickConversion {
    from: "c",
    to: "f",
    label: "°C → °F",
}];
