use std::io::{self, Write};

use crate::app::AppError;
use crate::catalog::{self, Category};
use crate::config::Config;
use crate::conversion::{self, ConversionError};
use crate::export;
use crate::gas::{
    self, CompressorStartupInput, FlowMeasurementInput, PipelineCapacityInput,
    PipelineInventoryInput, SeparatorBlowdownInput,
};
use crate::gas::gas_law::DEFAULT_COMPRESSIBILITY;
use crate::host::{self, HostChannel, ResultPayload};
use crate::i18n::{keys, Translator};
use crate::ledger::{fields, CalculationKind, LedgerError};
use crate::state::AppState;
use crate::storage::Storage;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Converter,
    Blowdown,
    Compressor,
    Flow,
    Pipeline,
    History,
    Favorites,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERTER));
    println!("{}", tr.t(keys::MAIN_MENU_BLOWDOWN));
    println!("{}", tr.t(keys::MAIN_MENU_COMPRESSOR));
    println!("{}", tr.t(keys::MAIN_MENU_FLOW));
    println!("{}", tr.t(keys::MAIN_MENU_PIPELINE));
    println!("{}", tr.t(keys::MAIN_MENU_HISTORY));
    println!("{}", tr.t(keys::MAIN_MENU_FAVORITES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr, keys::PROMPT_MENU_SELECT)?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Converter),
            "2" => return Ok(MenuChoice::Blowdown),
            "3" => return Ok(MenuChoice::Compressor),
            "4" => return Ok(MenuChoice::Flow),
            "5" => return Ok(MenuChoice::Pipeline),
            "6" => return Ok(MenuChoice::History),
            "7" => return Ok(MenuChoice::Favorites),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 성공한 변환은 이력에 기록된다.
pub fn handle_converter<S: Storage>(
    tr: &Translator,
    state: &mut AppState<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERTER_HEADING));
    let listing: Vec<String> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}) {}", i + 1, c.as_str()))
        .collect();
    println!("{}", listing.join("  "));
    let category = loop {
        let sel = read_line(tr, keys::CONVERTER_PROMPT_CATEGORY)?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if n >= 1 && n <= Category::ALL.len() {
                break Category::ALL[n - 1];
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    state.current_category = category;

    println!("{}", tr.t(keys::CONVERTER_UNITS_LABEL));
    for unit in category.units() {
        println!("  {:<8} {}", unit.id, unit.name);
    }
    let defaults = catalog::default_pair(category);
    let value = read_f64(tr, keys::CONVERTER_PROMPT_VALUE)?;
    let from = read_unit(
        tr,
        keys::CONVERTER_PROMPT_FROM,
        defaults.map(|(a, _)| a.id),
    )?;
    let to = read_unit(tr, keys::CONVERTER_PROMPT_TO, defaults.map(|(_, b)| b.id))?;

    match conversion::convert(category, value, &from, &to) {
        Ok(result) => {
            println!(
                "{} {} {}",
                tr.t(keys::CONVERTER_RESULT),
                conversion::format_result(category, result),
                to
            );
            let record = state.ledger.new_conversion(category, value, &from, result, &to);
            let id = record.id;
            state.ledger.record_conversion(record)?;
            println!("{}", tr.t(keys::CONVERTER_ACTIONS));
            let action = read_line(tr, keys::PROMPT_SELECT)?;
            match action.trim() {
                "f" => match state.ledger.promote_to_favorite(id) {
                    Ok(()) => println!("{}", tr.t(keys::CONVERTER_ADDED_FAVORITE)),
                    Err(LedgerError::AlreadyFavorite(_)) => {
                        println!("{}", tr.t(keys::CONVERTER_ALREADY_FAVORITE))
                    }
                    Err(e) => return Err(e.into()),
                },
                "s" => {
                    if let Some(rec) = state.ledger.history().first() {
                        let payload = ResultPayload::from_conversion(rec);
                        host::stdout_channel().send(&payload)?;
                        println!("{}", tr.t(keys::CONVERTER_SENT));
                    }
                }
                _ => {}
            }
        }
        Err(e) => print_conversion_error(tr, &e),
    }
    Ok(())
}

/// 세퍼레이터 블로다운 메뉴를 처리한다.
pub fn handle_blowdown<S: Storage>(
    tr: &Translator,
    state: &mut AppState<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BLOWDOWN_HEADING));
    let volume = read_f64(tr, keys::BLOWDOWN_PROMPT_VOLUME)?;
    let pressure = read_f64(tr, keys::PROMPT_PRESSURE_MPA)?;
    let temperature = read_f64(tr, keys::PROMPT_TEMPERATURE_K)?;
    let z = read_f64_or(tr, keys::PROMPT_COMPRESSIBILITY, DEFAULT_COMPRESSIBILITY)?;
    let count = read_u32(tr, keys::BLOWDOWN_PROMPT_COUNT)?;

    let result = gas::separator_blowdown(SeparatorBlowdownInput {
        separator_volume_m3: volume,
        pressure_mpa: pressure,
        temperature_k: temperature,
        compressibility: z,
        blowdowns_per_month: count,
    });
    println!("{} {:.1} m3", tr.t(keys::BLOWDOWN_RESULT_SINGLE), result.single_m3);
    println!("{} {:.1} m3", tr.t(keys::BLOWDOWN_RESULT_MONTHLY), result.monthly_m3);
    println!("{} {:.1} m3", tr.t(keys::BLOWDOWN_RESULT_YEARLY), result.yearly_m3);
    println!(
        "{} {:.1} / {:.1} / {:.1} m3",
        tr.t(keys::BLOWDOWN_RESULT_BREAKDOWN),
        result.volume_share_m3,
        result.compression_share_m3,
        result.temperature_share_m3
    );

    let inputs = fields(&[
        ("separator_volume_m3", volume),
        ("pressure_mpa", pressure),
        ("temperature_k", temperature),
        ("compressibility", z),
        ("blowdowns_per_month", f64::from(count)),
    ]);
    let outputs = fields(&[
        ("single_m3", result.single_m3),
        ("monthly_m3", result.monthly_m3),
        ("yearly_m3", result.yearly_m3),
        ("volume_share_m3", result.volume_share_m3),
        ("compression_share_m3", result.compression_share_m3),
        ("temperature_share_m3", result.temperature_share_m3),
    ]);
    let record =
        state
            .ledger
            .new_calculation(CalculationKind::SeparatorBlowdown, inputs, outputs, None);
    state.ledger.record_calculation(record)?;
    println!("{}", tr.t(keys::CALC_RECORDED));
    Ok(())
}

/// 압축기 기동 가스 메뉴를 처리한다.
pub fn handle_compressor<S: Storage>(
    tr: &Translator,
    state: &mut AppState<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPRESSOR_HEADING));
    let volume = read_f64(tr, keys::COMPRESSOR_PROMPT_VOLUME)?;
    let pressure = read_f64(tr, keys::PROMPT_PRESSURE_MPA)?;
    let temperature = read_f64(tr, keys::PROMPT_TEMPERATURE_K)?;
    let z = read_f64_or(tr, keys::PROMPT_COMPRESSIBILITY, DEFAULT_COMPRESSIBILITY)?;
    let count = read_u32(tr, keys::COMPRESSOR_PROMPT_COUNT)?;

    let result = gas::compressor_startup(CompressorStartupInput {
        start_line_volume_m3: volume,
        pressure_mpa: pressure,
        temperature_k: temperature,
        compressibility: z,
        starts_per_month: count,
    });
    println!("{} {:.1} m3", tr.t(keys::COMPRESSOR_RESULT_SINGLE), result.single_m3);
    println!("{} {:.1} m3", tr.t(keys::COMPRESSOR_RESULT_MONTHLY), result.monthly_m3);
    println!("{} {:.1} m3", tr.t(keys::COMPRESSOR_RESULT_YEARLY), result.yearly_m3);

    let inputs = fields(&[
        ("start_line_volume_m3", volume),
        ("pressure_mpa", pressure),
        ("temperature_k", temperature),
        ("compressibility", z),
        ("starts_per_month", f64::from(count)),
    ]);
    let outputs = fields(&[
        ("single_m3", result.single_m3),
        ("monthly_m3", result.monthly_m3),
        ("yearly_m3", result.yearly_m3),
    ]);
    let record =
        state
            .ledger
            .new_calculation(CalculationKind::CompressorStartup, inputs, outputs, None);
    state.ledger.record_calculation(record)?;
    println!("{}", tr.t(keys::CALC_RECORDED));
    Ok(())
}

/// 유량 측정 평균화 메뉴를 처리한다.
pub fn handle_flow<S: Storage>(tr: &Translator, state: &mut AppState<S>) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FLOW_HEADING));
    let p_max = read_f64(tr, keys::FLOW_PROMPT_P_MAX)?;
    let p_min = read_f64(tr, keys::FLOW_PROMPT_P_MIN)?;
    let t_max = read_f64(tr, keys::FLOW_PROMPT_T_MAX)?;
    let t_min = read_f64(tr, keys::FLOW_PROMPT_T_MIN)?;
    let rate = read_f64(tr, keys::FLOW_PROMPT_RATE)?;

    let result = gas::flow_measurement(FlowMeasurementInput {
        pressure_max_mpa: p_max,
        pressure_min_mpa: p_min,
        temperature_max_k: t_max,
        temperature_min_k: t_min,
        flow_m3_per_h: rate,
    });
    println!(
        "{} {:.3} MPa / {:.2} K",
        tr.t(keys::FLOW_RESULT_AVERAGES),
        result.pressure_avg_mpa,
        result.temperature_avg_k
    );
    println!(
        "{} {:.0} / {:.0} / {:.0} m3",
        tr.t(keys::FLOW_RESULT_THROUGHPUT),
        result.daily_m3,
        result.monthly_m3,
        result.yearly_m3
    );
    println!(
        "{} {:.2} .. {:.2} °C",
        tr.t(keys::FLOW_RESULT_RANGE),
        result.temperature_min_c,
        result.temperature_max_c
    );

    let inputs = fields(&[
        ("pressure_max_mpa", p_max),
        ("pressure_min_mpa", p_min),
        ("temperature_max_k", t_max),
        ("temperature_min_k", t_min),
        ("flow_m3_per_h", rate),
    ]);
    let outputs = fields(&[
        ("pressure_avg_mpa", result.pressure_avg_mpa),
        ("temperature_avg_k", result.temperature_avg_k),
        ("daily_m3", result.daily_m3),
        ("monthly_m3", result.monthly_m3),
        ("yearly_m3", result.yearly_m3),
        ("temperature_min_c", result.temperature_min_c),
        ("temperature_max_c", result.temperature_max_c),
    ]);
    let record =
        state
            .ledger
            .new_calculation(CalculationKind::FlowMeasurement, inputs, outputs, None);
    state.ledger.record_calculation(record)?;
    println!("{}", tr.t(keys::CALC_RECORDED));
    Ok(())
}

/// 관로 계산 메뉴를 처리한다.
pub fn handle_pipeline<S: Storage>(
    tr: &Translator,
    state: &mut AppState<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PIPELINE_HEADING));
    println!("{}", tr.t(keys::PIPELINE_OPTIONS));
    let sel = read_line(tr, keys::PROMPT_SELECT)?;
    match sel.trim() {
        "1" => {
            let od = read_f64(tr, keys::PIPELINE_PROMPT_OD)?;
            let wall = read_f64(tr, keys::PIPELINE_PROMPT_WALL)?;
            let length = read_f64(tr, keys::PIPELINE_PROMPT_LENGTH)?;
            let p_start = read_f64(tr, keys::PIPELINE_PROMPT_P_START)?;
            let p_end = read_f64(tr, keys::PIPELINE_PROMPT_P_END)?;
            let flow = read_f64(tr, keys::PIPELINE_PROMPT_FLOW)?;
            let temperature = read_f64(tr, keys::PROMPT_TEMPERATURE_K)?;
            let z = read_f64_or(tr, keys::PROMPT_COMPRESSIBILITY, DEFAULT_COMPRESSIBILITY)?;

            let result = gas::pipeline_inventory(PipelineInventoryInput {
                outer_diameter_mm: od,
                wall_thickness_mm: wall,
                length_km: length,
                pressure_start_mpa: p_start,
                pressure_end_mpa: p_end,
                flow_mln_m3_per_day: flow,
                temperature_k: temperature,
                compressibility: z,
            });
            println!(
                "{} {:.1} mm / {:.4} m2 / {:.1} m3",
                tr.t(keys::PIPELINE_RESULT_GEOMETRY),
                result.inner_diameter_mm,
                result.cross_section_m2,
                result.geometric_volume_m3
            );
            println!(
                "{} {:.2} m/s",
                tr.t(keys::PIPELINE_RESULT_VELOCITY),
                result.gas_velocity_m_per_s
            );
            println!(
                "{} {:.0} m3",
                tr.t(keys::PIPELINE_RESULT_INVENTORY),
                result.inventory_m3
            );

            let inputs = fields(&[
                ("outer_diameter_mm", od),
                ("wall_thickness_mm", wall),
                ("length_km", length),
                ("pressure_start_mpa", p_start),
                ("pressure_end_mpa", p_end),
                ("flow_mln_m3_per_day", flow),
                ("temperature_k", temperature),
                ("compressibility", z),
            ]);
            let outputs = fields(&[
                ("inner_diameter_mm", result.inner_diameter_mm),
                ("cross_section_m2", result.cross_section_m2),
                ("geometric_volume_m3", result.geometric_volume_m3),
                ("gas_velocity_m_per_s", result.gas_velocity_m_per_s),
                ("average_pressure_mpa", result.average_pressure_mpa),
                ("inventory_m3", result.inventory_m3),
            ]);
            let record = state.ledger.new_calculation(
                CalculationKind::PipelineInventory,
                inputs,
                outputs,
                None,
            );
            state.ledger.record_calculation(record)?;
            println!("{}", tr.t(keys::CALC_RECORDED));
        }
        "2" => {
            let id = read_f64(tr, keys::PIPELINE_PROMPT_ID)?;
            let p_start = read_f64(tr, keys::PIPELINE_PROMPT_P_START)?;
            let p_end = read_f64(tr, keys::PIPELINE_PROMPT_P_END)?;
            let length = read_f64(tr, keys::PIPELINE_PROMPT_LENGTH)?;
            let temperature = read_f64(tr, keys::PROMPT_TEMPERATURE_K)?;
            let z = read_f64_or(tr, keys::PROMPT_COMPRESSIBILITY, DEFAULT_COMPRESSIBILITY)?;
            let result = gas::pipeline_capacity(PipelineCapacityInput {
                inner_diameter_mm: id,
                pressure_start_mpa: p_start,
                pressure_end_mpa: p_end,
                length_km: length,
                temperature_k: temperature,
                compressibility: z,
                friction_lambda: 0.0,
            });
            println!(
                "{} {:.3} mln m3/day",
                tr.t(keys::PIPELINE_RESULT_CAPACITY),
                result.capacity_mln_m3_per_day
            );
        }
        "3" => {
            let id = read_f64(tr, keys::PIPELINE_PROMPT_ID)?;
            let p_start = read_f64(tr, keys::PIPELINE_PROMPT_P_START)?;
            let flow = read_f64(tr, keys::PIPELINE_PROMPT_FLOW)?;
            let length = read_f64(tr, keys::PIPELINE_PROMPT_LENGTH)?;
            let temperature = read_f64(tr, keys::PROMPT_TEMPERATURE_K)?;
            let z = read_f64_or(tr, keys::PROMPT_COMPRESSIBILITY, DEFAULT_COMPRESSIBILITY)?;
            let p_end = gas::final_pressure(id, p_start, flow, length, temperature, z);
            println!(
                "{} {:.3} MPa",
                tr.t(keys::PIPELINE_RESULT_FINAL_PRESSURE),
                p_end
            );
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 변환 이력 메뉴를 처리한다.
pub fn handle_history<S: Storage>(
    tr: &Translator,
    state: &mut AppState<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::HISTORY_HEADING));
    if state.ledger.history().is_empty() {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return Ok(());
    }
    for rec in state.ledger.history() {
        println!(
            "[{}] {} {} → {} {} ({}) {}",
            rec.id,
            rec.input_value,
            rec.from_unit,
            conversion::format_result(rec.category, rec.result),
            rec.to_unit,
            rec.category.as_str(),
            rec.created_at
        );
    }
    println!("{}", tr.t(keys::HISTORY_ACTIONS));
    let action = read_line(tr, keys::PROMPT_SELECT)?;
    match action.trim() {
        "p" => {
            let id = read_i64(tr, keys::HISTORY_PROMPT_ID)?;
            match state.ledger.promote_to_favorite(id) {
                Ok(()) => println!("{}", tr.t(keys::HISTORY_PROMOTED)),
                Err(LedgerError::AlreadyFavorite(_)) => {
                    println!("{}", tr.t(keys::CONVERTER_ALREADY_FAVORITE))
                }
                Err(LedgerError::NotFound(id)) => {
                    println!("{} {}", tr.t(keys::ERROR_NOT_FOUND), id)
                }
                Err(e) => return Err(e.into()),
            }
        }
        "s" => {
            let id = read_i64(tr, keys::HISTORY_PROMPT_ID)?;
            match state.ledger.history().iter().find(|r| r.id == id) {
                Some(rec) => {
                    let payload = ResultPayload::from_conversion(rec);
                    host::stdout_channel().send(&payload)?;
                    println!("{}", tr.t(keys::HISTORY_SENT));
                }
                None => println!("{} {}", tr.t(keys::ERROR_NOT_FOUND), id),
            }
        }
        "c" => {
            // 파괴적 동작 확인 게이트
            let confirm = read_line(tr, keys::HISTORY_CLEAR_CONFIRM)?;
            if confirm.trim().eq_ignore_ascii_case("y") {
                state.ledger.clear_history()?;
                println!("{}", tr.t(keys::HISTORY_CLEARED));
            } else {
                println!("{}", tr.t(keys::HISTORY_KEPT));
            }
        }
        "e" => {
            std::fs::write("history.csv", export::history_csv(state.ledger.history()))?;
            std::fs::write(
                "calculations.csv",
                export::calculations_csv(state.ledger.calculations()),
            )?;
            println!(
                "{} history.csv, calculations.csv",
                tr.t(keys::HISTORY_EXPORTED)
            );
        }
        _ => {}
    }
    Ok(())
}

/// 즐겨찾기 메뉴를 처리한다. 선택한 항목은 저장된 값으로 다시 변환된다.
pub fn handle_favorites<S: Storage>(
    tr: &Translator,
    state: &mut AppState<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FAVORITES_HEADING));
    if state.ledger.favorites().is_empty() {
        println!("{}", tr.t(keys::FAVORITES_EMPTY));
        return Ok(());
    }
    for rec in state.ledger.favorites() {
        println!(
            "[{}] {} {} → {} ({})",
            rec.id,
            rec.input_value,
            rec.from_unit,
            rec.to_unit,
            rec.category.as_str()
        );
    }
    println!("{}", tr.t(keys::FAVORITES_ACTIONS));
    let action = read_line(tr, keys::PROMPT_SELECT)?;
    if action.trim() == "u" {
        let id = read_i64(tr, keys::FAVORITES_PROMPT_ID)?;
        let recalled = match state.ledger.recall_favorite(id) {
            Ok(rec) => rec.clone(),
            Err(LedgerError::NotFound(id)) => {
                println!("{} {}", tr.t(keys::ERROR_NOT_FOUND), id);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        // 재생: 카테고리 전환 + 필드 채움 + 재변환
        state.current_category = recalled.category;
        match conversion::convert(
            recalled.category,
            recalled.input_value,
            &recalled.from_unit,
            &recalled.to_unit,
        ) {
            Ok(result) => {
                println!(
                    "{} {} {}",
                    tr.t(keys::CONVERTER_RESULT),
                    conversion::format_result(recalled.category, result),
                    recalled.to_unit
                );
                let record = state.ledger.new_conversion(
                    recalled.category,
                    recalled.input_value,
                    &recalled.from_unit,
                    result,
                    &recalled.to_unit,
                );
                state.ledger.record_conversion(record)?;
                println!("{}", tr.t(keys::FAVORITES_RECALLED));
            }
            Err(e) => print_conversion_error(tr, &e),
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. config 저장은 호출부에서 한다.
pub fn handle_settings<S: Storage>(
    tr: &Translator,
    config: &mut Config,
    state: &mut AppState<S>,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));

    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), config.language);
    let lang = read_line(tr, keys::SETTINGS_PROMPT_LANGUAGE)?;
    if !lang.trim().is_empty() {
        config.language = lang.trim().to_string();
    }

    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_THEME), state.theme.as_str());
    let theme_sel = read_line(tr, keys::SETTINGS_PROMPT_THEME)?;
    if theme_sel.trim() == "t" {
        let next = state.theme.toggled();
        state.set_theme(next)?;
    }

    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_CATEGORY),
        config.default_category.as_str()
    );
    let cat = read_line(tr, keys::SETTINGS_PROMPT_CATEGORY)?;
    if !cat.trim().is_empty() {
        match Category::parse(&cat) {
            Some(category) => config.default_category = category,
            None => println!("{}", tr.t(keys::SETTINGS_UNCHANGED)),
        }
    }

    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn print_conversion_error(tr: &Translator, err: &ConversionError) {
    match err {
        ConversionError::UnknownUnit(u) => {
            println!("{} {}", tr.t(keys::ERROR_UNKNOWN_UNIT), u)
        }
        ConversionError::MissingFactor(u) => {
            println!("{} {}", tr.t(keys::ERROR_MISSING_FACTOR), u)
        }
        ConversionError::MissingRate { .. } => {
            println!("{}", tr.t(keys::ERROR_MISSING_RATE))
        }
    }
}

fn read_line(tr: &Translator, prompt_key: &str) -> Result<String, AppError> {
    print!("{}", tr.t(prompt_key));
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt_key: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr, prompt_key)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력을 기본값으로 받는 숫자 입력.
fn read_f64_or(tr: &Translator, prompt_key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(tr, prompt_key)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt_key: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(tr, prompt_key)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_i64(tr: &Translator, prompt_key: &str) -> Result<i64, AppError> {
    loop {
        let s = read_line(tr, prompt_key)?;
        match s.trim().parse::<i64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_unit(
    tr: &Translator,
    prompt_key: &str,
    default: Option<&'static str>,
) -> Result<String, AppError> {
    let s = read_line(tr, prompt_key)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        if let Some(d) = default {
            return Ok(d.to_string());
        }
    }
    Ok(trimmed.to_string())
}
