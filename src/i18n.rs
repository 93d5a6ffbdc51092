use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARN_PREFIX: &str = "general.warn_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERTER: &str = "main_menu.converter";
    pub const MAIN_MENU_BLOWDOWN: &str = "main_menu.blowdown";
    pub const MAIN_MENU_COMPRESSOR: &str = "main_menu.compressor";
    pub const MAIN_MENU_FLOW: &str = "main_menu.flow";
    pub const MAIN_MENU_PIPELINE: &str = "main_menu.pipeline";
    pub const MAIN_MENU_HISTORY: &str = "main_menu.history";
    pub const MAIN_MENU_FAVORITES: &str = "main_menu.favorites";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_UNKNOWN_UNIT: &str = "error.unknown_unit";
    pub const ERROR_MISSING_FACTOR: &str = "error.missing_factor";
    pub const ERROR_MISSING_RATE: &str = "error.missing_rate";
    pub const ERROR_NOT_FOUND: &str = "error.not_found";

    pub const CONVERTER_HEADING: &str = "converter.heading";
    pub const CONVERTER_PROMPT_CATEGORY: &str = "converter.prompt_category";
    pub const CONVERTER_UNITS_LABEL: &str = "converter.units_label";
    pub const CONVERTER_PROMPT_VALUE: &str = "converter.prompt_value";
    pub const CONVERTER_PROMPT_FROM: &str = "converter.prompt_from";
    pub const CONVERTER_PROMPT_TO: &str = "converter.prompt_to";
    pub const CONVERTER_RESULT: &str = "converter.result";
    pub const CONVERTER_ACTIONS: &str = "converter.actions";
    pub const CONVERTER_ADDED_FAVORITE: &str = "converter.added_favorite";
    pub const CONVERTER_ALREADY_FAVORITE: &str = "converter.already_favorite";
    pub const CONVERTER_SENT: &str = "converter.sent";

    pub const BLOWDOWN_HEADING: &str = "blowdown.heading";
    pub const BLOWDOWN_PROMPT_VOLUME: &str = "blowdown.prompt_volume";
    pub const BLOWDOWN_PROMPT_COUNT: &str = "blowdown.prompt_count";
    pub const BLOWDOWN_RESULT_SINGLE: &str = "blowdown.result_single";
    pub const BLOWDOWN_RESULT_MONTHLY: &str = "blowdown.result_monthly";
    pub const BLOWDOWN_RESULT_YEARLY: &str = "blowdown.result_yearly";
    pub const BLOWDOWN_RESULT_BREAKDOWN: &str = "blowdown.result_breakdown";

    pub const COMPRESSOR_HEADING: &str = "compressor.heading";
    pub const COMPRESSOR_PROMPT_VOLUME: &str = "compressor.prompt_volume";
    pub const COMPRESSOR_PROMPT_COUNT: &str = "compressor.prompt_count";
    pub const COMPRESSOR_RESULT_SINGLE: &str = "compressor.result_single";
    pub const COMPRESSOR_RESULT_MONTHLY: &str = "compressor.result_monthly";
    pub const COMPRESSOR_RESULT_YEARLY: &str = "compressor.result_yearly";

    pub const PROMPT_PRESSURE_MPA: &str = "prompt.pressure_mpa";
    pub const PROMPT_TEMPERATURE_K: &str = "prompt.temperature_k";
    pub const PROMPT_COMPRESSIBILITY: &str = "prompt.compressibility";

    pub const FLOW_HEADING: &str = "flow.heading";
    pub const FLOW_PROMPT_P_MAX: &str = "flow.prompt_p_max";
    pub const FLOW_PROMPT_P_MIN: &str = "flow.prompt_p_min";
    pub const FLOW_PROMPT_T_MAX: &str = "flow.prompt_t_max";
    pub const FLOW_PROMPT_T_MIN: &str = "flow.prompt_t_min";
    pub const FLOW_PROMPT_RATE: &str = "flow.prompt_rate";
    pub const FLOW_RESULT_AVERAGES: &str = "flow.result_averages";
    pub const FLOW_RESULT_THROUGHPUT: &str = "flow.result_throughput";
    pub const FLOW_RESULT_RANGE: &str = "flow.result_range";

    pub const PIPELINE_HEADING: &str = "pipeline.heading";
    pub const PIPELINE_OPTIONS: &str = "pipeline.options";
    pub const PIPELINE_PROMPT_OD: &str = "pipeline.prompt_od";
    pub const PIPELINE_PROMPT_WALL: &str = "pipeline.prompt_wall";
    pub const PIPELINE_PROMPT_ID: &str = "pipeline.prompt_id";
    pub const PIPELINE_PROMPT_LENGTH: &str = "pipeline.prompt_length";
    pub const PIPELINE_PROMPT_P_START: &str = "pipeline.prompt_p_start";
    pub const PIPELINE_PROMPT_P_END: &str = "pipeline.prompt_p_end";
    pub const PIPELINE_PROMPT_FLOW: &str = "pipeline.prompt_flow";
    pub const PIPELINE_RESULT_GEOMETRY: &str = "pipeline.result_geometry";
    pub const PIPELINE_RESULT_VELOCITY: &str = "pipeline.result_velocity";
    pub const PIPELINE_RESULT_INVENTORY: &str = "pipeline.result_inventory";
    pub const PIPELINE_RESULT_CAPACITY: &str = "pipeline.result_capacity";
    pub const PIPELINE_RESULT_FINAL_PRESSURE: &str = "pipeline.result_final_pressure";

    pub const CALC_RECORDED: &str = "calc.recorded";

    pub const HISTORY_HEADING: &str = "history.heading";
    pub const HISTORY_EMPTY: &str = "history.empty";
    pub const HISTORY_ACTIONS: &str = "history.actions";
    pub const HISTORY_PROMPT_ID: &str = "history.prompt_id";
    pub const HISTORY_PROMOTED: &str = "history.promoted";
    pub const HISTORY_CLEAR_CONFIRM: &str = "history.clear_confirm";
    pub const HISTORY_CLEARED: &str = "history.cleared";
    pub const HISTORY_KEPT: &str = "history.kept";
    pub const HISTORY_SENT: &str = "history.sent";
    pub const HISTORY_EXPORTED: &str = "history.exported";

    pub const FAVORITES_HEADING: &str = "favorites.heading";
    pub const FAVORITES_EMPTY: &str = "favorites.empty";
    pub const FAVORITES_ACTIONS: &str = "favorites.actions";
    pub const FAVORITES_PROMPT_ID: &str = "favorites.prompt_id";
    pub const FAVORITES_RECALLED: &str = "favorites.recalled";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_CURRENT_THEME: &str = "settings.current_theme";
    pub const SETTINGS_PROMPT_THEME: &str = "settings.prompt_theme";
    pub const SETTINGS_CURRENT_CATEGORY: &str = "settings.current_category";
    pub const SETTINGS_PROMPT_CATEGORY: &str = "settings.prompt_category";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_UNCHANGED: &str = "settings.unchanged";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Ru,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("ru") {
            Language::Ru
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Ru => "ru",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 해당 언어 번역이 없으면 한국어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En | Language::Ru => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" => Some("en-us".into()),
        "ru" | "ru-ru" => Some("ru-ru".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("ru") => Some("ru-ru".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        "ru" => Some("ru-ru".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션 테이블로 구성된 키-문자열 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        "ru-ru" | "ru" => parse_toml_to_map(include_str!("../locales/ru-ru.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        WARN_PREFIX => "경고",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Gas Engineering Toolbox ===",
        MAIN_MENU_CONVERTER => "1) 단위 변환기",
        MAIN_MENU_BLOWDOWN => "2) 세퍼레이터 블로다운",
        MAIN_MENU_COMPRESSOR => "3) 압축기 기동 가스",
        MAIN_MENU_FLOW => "4) 유량 측정 평균화",
        MAIN_MENU_PIPELINE => "5) 관로 계산",
        MAIN_MENU_HISTORY => "6) 변환 이력",
        MAIN_MENU_FAVORITES => "7) 즐겨찾기",
        MAIN_MENU_SETTINGS => "8) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_UNKNOWN_UNIT => "알 수 없는 단위:",
        ERROR_MISSING_FACTOR => "변환 배율이 없는 단위:",
        ERROR_MISSING_RATE => "해당 통화쌍의 환율이 없습니다.",
        ERROR_NOT_FOUND => "해당 id의 기록이 없습니다:",
        CONVERTER_HEADING => "\n-- 단위 변환 --",
        CONVERTER_PROMPT_CATEGORY => "카테고리 번호를 입력: ",
        CONVERTER_UNITS_LABEL => "사용 가능한 단위:",
        CONVERTER_PROMPT_VALUE => "값 입력: ",
        CONVERTER_PROMPT_FROM => "입력 단위 (엔터=기본값): ",
        CONVERTER_PROMPT_TO => "변환 단위 (엔터=기본값): ",
        CONVERTER_RESULT => "변환 결과:",
        CONVERTER_ACTIONS => "f) 즐겨찾기 추가  s) 호스트로 전송  엔터) 계속",
        CONVERTER_ADDED_FAVORITE => "즐겨찾기에 추가했습니다.",
        CONVERTER_ALREADY_FAVORITE => "이미 즐겨찾기에 있습니다.",
        CONVERTER_SENT => "호스트로 전송했습니다.",
        BLOWDOWN_HEADING => "\n-- 세퍼레이터 블로다운 --",
        BLOWDOWN_PROMPT_VOLUME => "세퍼레이터 체적 [m3]: ",
        BLOWDOWN_PROMPT_COUNT => "월간 블로다운 횟수: ",
        BLOWDOWN_RESULT_SINGLE => "1회 방출량 (표준상태):",
        BLOWDOWN_RESULT_MONTHLY => "월간 방출량:",
        BLOWDOWN_RESULT_YEARLY => "연간 방출량:",
        BLOWDOWN_RESULT_BREAKDOWN => "구성 (체적/압축/온도 보정):",
        COMPRESSOR_HEADING => "\n-- 압축기 기동 가스 --",
        COMPRESSOR_PROMPT_VOLUME => "기동 배관 구간 체적 [m3]: ",
        COMPRESSOR_PROMPT_COUNT => "월간 기동 횟수: ",
        COMPRESSOR_RESULT_SINGLE => "1회 기동 소모량 (표준상태):",
        COMPRESSOR_RESULT_MONTHLY => "월간 소모량:",
        COMPRESSOR_RESULT_YEARLY => "연간 소모량:",
        PROMPT_PRESSURE_MPA => "압력 [MPa]: ",
        PROMPT_TEMPERATURE_K => "온도 [K]: ",
        PROMPT_COMPRESSIBILITY => "압축계수 z (엔터=0.95): ",
        FLOW_HEADING => "\n-- 유량 측정 평균화 --",
        FLOW_PROMPT_P_MAX => "최대 압력 [MPa]: ",
        FLOW_PROMPT_P_MIN => "최소 압력 [MPa]: ",
        FLOW_PROMPT_T_MAX => "최대 온도 [K]: ",
        FLOW_PROMPT_T_MIN => "최소 온도 [K]: ",
        FLOW_PROMPT_RATE => "유량 [m3/h]: ",
        FLOW_RESULT_AVERAGES => "평균 압력/온도:",
        FLOW_RESULT_THROUGHPUT => "처리량 (일/월/년):",
        FLOW_RESULT_RANGE => "온도 범위 (섭씨):",
        PIPELINE_HEADING => "\n-- 관로 계산 --",
        PIPELINE_OPTIONS => "1) 가스 재고  2) 통과능력  3) 종점 압력",
        PIPELINE_PROMPT_OD => "외경 [mm]: ",
        PIPELINE_PROMPT_WALL => "벽 두께 [mm]: ",
        PIPELINE_PROMPT_ID => "내경 [mm]: ",
        PIPELINE_PROMPT_LENGTH => "구간 길이 [km]: ",
        PIPELINE_PROMPT_P_START => "시점 압력 [MPa]: ",
        PIPELINE_PROMPT_P_END => "종점 압력 [MPa]: ",
        PIPELINE_PROMPT_FLOW => "수송량 [백만 m3/일]: ",
        PIPELINE_RESULT_GEOMETRY => "내경/단면적/기하 체적:",
        PIPELINE_RESULT_VELOCITY => "가스 유속:",
        PIPELINE_RESULT_INVENTORY => "관내 가스량 (표준상태):",
        PIPELINE_RESULT_CAPACITY => "통과능력:",
        PIPELINE_RESULT_FINAL_PRESSURE => "종점 압력:",
        CALC_RECORDED => "계산 이력에 기록했습니다.",
        HISTORY_HEADING => "\n-- 변환 이력 --",
        HISTORY_EMPTY => "이력이 비어 있습니다.",
        HISTORY_ACTIONS => "p) 즐겨찾기 승격  s) 호스트로 전송  c) 이력 삭제  e) CSV 내보내기  엔터) 뒤로",
        HISTORY_PROMPT_ID => "기록 id: ",
        HISTORY_PROMOTED => "즐겨찾기로 승격했습니다.",
        HISTORY_CLEAR_CONFIRM => "이력을 모두 삭제할까요? (y/N): ",
        HISTORY_CLEARED => "이력을 삭제했습니다.",
        HISTORY_KEPT => "삭제를 취소했습니다.",
        HISTORY_SENT => "호스트로 전송했습니다.",
        HISTORY_EXPORTED => "내보냈습니다:",
        FAVORITES_HEADING => "\n-- 즐겨찾기 --",
        FAVORITES_EMPTY => "즐겨찾기가 비어 있습니다.",
        FAVORITES_ACTIONS => "u) 다시 변환  엔터) 뒤로",
        FAVORITES_PROMPT_ID => "즐겨찾기 id: ",
        FAVORITES_RECALLED => "즐겨찾기 항목으로 다시 변환했습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (ko/en/ru, 엔터=유지): ",
        SETTINGS_CURRENT_THEME => "현재 테마:",
        SETTINGS_PROMPT_THEME => "t) 테마 전환  엔터) 유지: ",
        SETTINGS_CURRENT_CATEGORY => "기본 카테고리:",
        SETTINGS_PROMPT_CATEGORY => "기본 카테고리 (length/weight/..., 엔터=유지): ",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        SETTINGS_UNCHANGED => "변경하지 않았습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        WARN_PREFIX => "Warning",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Gas Engineering Toolbox ===",
        MAIN_MENU_CONVERTER => "1) Unit Converter",
        MAIN_MENU_BLOWDOWN => "2) Separator Blowdown",
        MAIN_MENU_COMPRESSOR => "3) Compressor Startup Gas",
        MAIN_MENU_FLOW => "4) Flow Measurement Averaging",
        MAIN_MENU_PIPELINE => "5) Pipeline Calculations",
        MAIN_MENU_HISTORY => "6) Conversion History",
        MAIN_MENU_FAVORITES => "7) Favorites",
        MAIN_MENU_SETTINGS => "8) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_UNKNOWN_UNIT => "Unknown unit:",
        ERROR_MISSING_FACTOR => "Unit has no conversion factor:",
        ERROR_MISSING_RATE => "No exchange rate for that currency pair.",
        ERROR_NOT_FOUND => "No record with that id:",
        CONVERTER_HEADING => "\n-- Unit Conversion --",
        CONVERTER_PROMPT_CATEGORY => "Enter category number: ",
        CONVERTER_UNITS_LABEL => "Available units:",
        CONVERTER_PROMPT_VALUE => "Value: ",
        CONVERTER_PROMPT_FROM => "From unit (enter = default): ",
        CONVERTER_PROMPT_TO => "To unit (enter = default): ",
        CONVERTER_RESULT => "Result:",
        CONVERTER_ACTIONS => "f) add to favorites  s) send to host  enter) continue",
        CONVERTER_ADDED_FAVORITE => "Added to favorites.",
        CONVERTER_ALREADY_FAVORITE => "Already in favorites.",
        CONVERTER_SENT => "Sent to host.",
        BLOWDOWN_HEADING => "\n-- Separator Blowdown --",
        BLOWDOWN_PROMPT_VOLUME => "Separator volume [m3]: ",
        BLOWDOWN_PROMPT_COUNT => "Blowdowns per month: ",
        BLOWDOWN_RESULT_SINGLE => "Single blowdown (normal conditions):",
        BLOWDOWN_RESULT_MONTHLY => "Monthly:",
        BLOWDOWN_RESULT_YEARLY => "Yearly:",
        BLOWDOWN_RESULT_BREAKDOWN => "Breakdown (volume/compression/temperature):",
        COMPRESSOR_HEADING => "\n-- Compressor Startup Gas --",
        COMPRESSOR_PROMPT_VOLUME => "Start-line segment volume [m3]: ",
        COMPRESSOR_PROMPT_COUNT => "Starts per month: ",
        COMPRESSOR_RESULT_SINGLE => "Single start (normal conditions):",
        COMPRESSOR_RESULT_MONTHLY => "Monthly:",
        COMPRESSOR_RESULT_YEARLY => "Yearly:",
        PROMPT_PRESSURE_MPA => "Pressure [MPa]: ",
        PROMPT_TEMPERATURE_K => "Temperature [K]: ",
        PROMPT_COMPRESSIBILITY => "Compressibility z (enter = 0.95): ",
        FLOW_HEADING => "\n-- Flow Measurement Averaging --",
        FLOW_PROMPT_P_MAX => "Max pressure [MPa]: ",
        FLOW_PROMPT_P_MIN => "Min pressure [MPa]: ",
        FLOW_PROMPT_T_MAX => "Max temperature [K]: ",
        FLOW_PROMPT_T_MIN => "Min temperature [K]: ",
        FLOW_PROMPT_RATE => "Flow rate [m3/h]: ",
        FLOW_RESULT_AVERAGES => "Average pressure/temperature:",
        FLOW_RESULT_THROUGHPUT => "Throughput (day/month/year):",
        FLOW_RESULT_RANGE => "Temperature range (Celsius):",
        PIPELINE_HEADING => "\n-- Pipeline Calculations --",
        PIPELINE_OPTIONS => "1) Gas inventory  2) Capacity  3) Final pressure",
        PIPELINE_PROMPT_OD => "Outer diameter [mm]: ",
        PIPELINE_PROMPT_WALL => "Wall thickness [mm]: ",
        PIPELINE_PROMPT_ID => "Inner diameter [mm]: ",
        PIPELINE_PROMPT_LENGTH => "Segment length [km]: ",
        PIPELINE_PROMPT_P_START => "Start pressure [MPa]: ",
        PIPELINE_PROMPT_P_END => "End pressure [MPa]: ",
        PIPELINE_PROMPT_FLOW => "Flow rate [mln m3/day]: ",
        PIPELINE_RESULT_GEOMETRY => "Inner diameter / cross-section / volume:",
        PIPELINE_RESULT_VELOCITY => "Gas velocity:",
        PIPELINE_RESULT_INVENTORY => "Gas in pipe (normal conditions):",
        PIPELINE_RESULT_CAPACITY => "Capacity:",
        PIPELINE_RESULT_FINAL_PRESSURE => "Final pressure:",
        CALC_RECORDED => "Recorded to calculation history.",
        HISTORY_HEADING => "\n-- Conversion History --",
        HISTORY_EMPTY => "History is empty.",
        HISTORY_ACTIONS => "p) promote to favorites  s) send to host  c) clear  e) export CSV  enter) back",
        HISTORY_PROMPT_ID => "Record id: ",
        HISTORY_PROMOTED => "Promoted to favorites.",
        HISTORY_CLEAR_CONFIRM => "Clear all history? (y/N): ",
        HISTORY_CLEARED => "History cleared.",
        HISTORY_KEPT => "Clear cancelled.",
        HISTORY_SENT => "Sent to host.",
        HISTORY_EXPORTED => "Exported:",
        FAVORITES_HEADING => "\n-- Favorites --",
        FAVORITES_EMPTY => "No favorites yet.",
        FAVORITES_ACTIONS => "u) convert again  enter) back",
        FAVORITES_PROMPT_ID => "Favorite id: ",
        FAVORITES_RECALLED => "Re-ran the favorite conversion.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language code (ko/en/ru, enter = keep): ",
        SETTINGS_CURRENT_THEME => "Current theme:",
        SETTINGS_PROMPT_THEME => "t) toggle theme  enter) keep: ",
        SETTINGS_CURRENT_CATEGORY => "Default category:",
        SETTINGS_PROMPT_CATEGORY => "Default category (length/weight/..., enter = keep): ",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_UNCHANGED => "Nothing changed.",
        _ => return None,
    })
}
