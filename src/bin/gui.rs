#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use gas_engineering_toolbox::{
    catalog::{self, Category},
    config,
    conversion::{self, ConversionError},
    export,
    gas::{
        self, gas_law::DEFAULT_COMPRESSIBILITY, CompressorStartupInput, FlowMeasurementInput,
        PipelineInventoryInput, SeparatorBlowdownInput,
    },
    host::{self, HostChannel, ResultPayload},
    i18n,
    ledger::{fields, CalculationKind},
    state::{AppState, Theme},
    storage::FileStorage,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en/ru)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    let lang_arg = cli_lang.unwrap_or_else(|| "auto".to_string());
    let resolved = i18n::resolve_language(&lang_arg, Some(app_cfg.language.as_str()));
    app_cfg.language = resolved;

    let storage = FileStorage::open(app_cfg.resolved_data_dir())?;
    let (state, issues) = AppState::load(storage, app_cfg.default_category)?;

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1080.0, 720.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Gas Engineering Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg, state, issues))
        }),
    )?;
    Ok(())
}

/// 실행 위치 주변에서 창 아이콘을 찾는다. 없으면 기본 아이콘을 쓴다.
fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, font_name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(font_name.to_string(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.to_string());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name.to_string());
    ctx.set_fonts(fonts);
}

/// 한글/키릴 문자를 표시하기 위해 시스템에서 쓸 만한 폰트를 찾아 적용한다.
/// 1) assets/fonts/ 2) Windows 시스템 폰트 3) Linux 공용 폰트 순서로 찾고
/// 모두 실패하면 Err를 반환해 기본 폰트로 동작한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/malgun.ttf".into(),
        "assets/fonts/NanumGothic.ttf".into(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts_dir.join(cand));
        }
    }
    for cand in [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    ] {
        candidates.push(cand.into());
    }

    for path in candidates {
        if path.exists() {
            let bytes = fs::read(&path)
                .map_err(|e| format!("Failed to read font ({}): {e}", path.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }
    Err("CJK font not found; falling back to built-in fonts.".into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Converter,
    Blowdown,
    Compressor,
    Flow,
    Pipeline,
    Ledger,
    Settings,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    state: AppState<FileStorage>,
    tab: Tab,
    status: Option<String>,
    lang_input: String,
    confirm_clear: bool,
    last_conversion_id: Option<i64>,
    // 단위 변환
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // 블로다운
    bd_volume: f64,
    bd_pressure: f64,
    bd_temperature: f64,
    bd_z: f64,
    bd_count: u32,
    bd_result: Option<String>,
    // 압축기 기동
    cs_volume: f64,
    cs_pressure: f64,
    cs_temperature: f64,
    cs_z: f64,
    cs_count: u32,
    cs_result: Option<String>,
    // 유량 평균화
    fm_p_max: f64,
    fm_p_min: f64,
    fm_t_max: f64,
    fm_t_min: f64,
    fm_rate: f64,
    fm_result: Option<String>,
    // 관로
    pl_od: f64,
    pl_wall: f64,
    pl_length: f64,
    pl_p_start: f64,
    pl_p_end: f64,
    pl_flow: f64,
    pl_temperature: f64,
    pl_z: f64,
    pl_result: Option<String>,
}

impl GuiApp {
    fn new(
        config: config::Config,
        state: AppState<FileStorage>,
        issues: Vec<gas_engineering_toolbox::ledger::LoadIssue>,
    ) -> Self {
        let tr = i18n::Translator::new_with_pack(&config.language, None);
        let lang_input = config.language.clone();
        let status = if issues.is_empty() {
            None
        } else {
            Some(
                issues
                    .iter()
                    .map(|i| format!("{}: {}", i.key, i.detail))
                    .collect::<Vec<_>>()
                    .join(" / "),
            )
        };
        let (conv_from, conv_to) = match catalog::default_pair(state.current_category) {
            Some((a, b)) => (a.id.to_string(), b.id.to_string()),
            None => (String::new(), String::new()),
        };
        Self {
            config,
            tr,
            state,
            tab: Tab::Converter,
            status,
            lang_input,
            confirm_clear: false,
            last_conversion_id: None,
            conv_value: 1.0,
            conv_from,
            conv_to,
            conv_result: None,
            bd_volume: 15.0,
            bd_pressure: 1.2,
            bd_temperature: 293.0,
            bd_z: DEFAULT_COMPRESSIBILITY,
            bd_count: 4,
            bd_result: None,
            cs_volume: 8.0,
            cs_pressure: 4.5,
            cs_temperature: 288.0,
            cs_z: DEFAULT_COMPRESSIBILITY,
            cs_count: 2,
            cs_result: None,
            fm_p_max: 5.4,
            fm_p_min: 5.0,
            fm_t_max: 295.0,
            fm_t_min: 285.0,
            fm_rate: 12_000.0,
            fm_result: None,
            pl_od: 720.0,
            pl_wall: 10.0,
            pl_length: 25.0,
            pl_p_start: 5.4,
            pl_p_end: 4.9,
            pl_flow: 12.0,
            pl_temperature: 288.0,
            pl_z: DEFAULT_COMPRESSIBILITY,
            pl_result: None,
        }
    }

    fn apply_default_units(&mut self) {
        if let Some((a, b)) = catalog::default_pair(self.state.current_category) {
            self.conv_from = a.id.to_string();
            self.conv_to = b.id.to_string();
        }
        self.conv_result = None;
    }

    fn conversion_error_text(&self, err: &ConversionError) -> String {
        match err {
            ConversionError::UnknownUnit(u) => {
                format!("{} {}", self.tr.t(i18n::keys::ERROR_UNKNOWN_UNIT), u)
            }
            ConversionError::MissingFactor(u) => {
                format!("{} {}", self.tr.t(i18n::keys::ERROR_MISSING_FACTOR), u)
            }
            ConversionError::MissingRate { .. } => {
                self.tr.t(i18n::keys::ERROR_MISSING_RATE).to_string()
            }
        }
    }

    /// 현재 폼 값으로 변환을 실행하고 성공 시 이력에 기록한다.
    fn run_conversion(&mut self) {
        let category = self.state.current_category;
        match conversion::convert(category, self.conv_value, &self.conv_from, &self.conv_to) {
            Ok(result) => {
                self.conv_result = Some(format!(
                    "{} {}",
                    conversion::format_result(category, result),
                    self.conv_to
                ));
                let record = self.state.ledger.new_conversion(
                    category,
                    self.conv_value,
                    &self.conv_from,
                    result,
                    &self.conv_to,
                );
                self.last_conversion_id = Some(record.id);
                if let Err(e) = self.state.ledger.record_conversion(record) {
                    self.status = Some(e.to_string());
                }
            }
            Err(e) => {
                self.conv_result = None;
                self.status = Some(self.conversion_error_text(&e));
            }
        }
    }

    fn send_record_to_host(&mut self, id: i64) {
        let payload = self
            .state
            .ledger
            .history()
            .iter()
            .find(|r| r.id == id)
            .map(ResultPayload::from_conversion);
        match payload {
            Some(payload) => {
                let result = host::stdout_channel().send(&payload);
                self.status = Some(match result {
                    Ok(()) => self.tr.t(i18n::keys::CONVERTER_SENT).to_string(),
                    Err(e) => e.to_string(),
                });
            }
            None => {
                self.status = Some(format!(
                    "{} {}",
                    self.tr.t(i18n::keys::ERROR_NOT_FOUND),
                    id
                ));
            }
        }
    }

    fn record_calculation(
        &mut self,
        kind: CalculationKind,
        inputs: std::collections::BTreeMap<String, f64>,
        outputs: std::collections::BTreeMap<String, f64>,
    ) {
        let record = self.state.ledger.new_calculation(kind, inputs, outputs, None);
        if let Err(e) = self.state.ledger.record_calculation(record) {
            self.status = Some(e.to_string());
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Converter, txt("gui.tab.converter", "Unit Converter")),
            (Tab::Blowdown, txt("gui.tab.blowdown", "Separator Blowdown")),
            (Tab::Compressor, txt("gui.tab.compressor", "Compressor Startup")),
            (Tab::Flow, txt("gui.tab.flow", "Flow Averaging")),
            (Tab::Pipeline, txt("gui.tab.pipeline", "Pipeline")),
            (Tab::Ledger, txt("gui.tab.ledger", "History & Favorites")),
            (Tab::Settings, txt("gui.tab.settings", "Settings")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.converter.heading", "Unit Converter"));
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.converter.quantity", "Category"));
                    let before = self.state.current_category;
                    egui::ComboBox::from_id_source("conv_category")
                        .selected_text(self.state.current_category.as_str())
                        .show_ui(ui, |ui| {
                            for cat in Category::ALL {
                                ui.selectable_value(
                                    &mut self.state.current_category,
                                    cat,
                                    cat.as_str(),
                                );
                            }
                        });
                    if before != self.state.current_category {
                        self.apply_default_units();
                    }
                    ui.end_row();

                    ui.label(txt("gui.converter.value", "Value"));
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                    ui.end_row();

                    ui.label(txt("gui.converter.from", "From"));
                    egui::ComboBox::from_id_source("conv_from")
                        .selected_text(self.conv_from.clone())
                        .show_ui(ui, |ui| {
                            for unit in self.state.current_category.units() {
                                ui.selectable_value(
                                    &mut self.conv_from,
                                    unit.id.to_string(),
                                    format!("{} ({})", unit.id, unit.name),
                                );
                            }
                        });
                    ui.end_row();

                    ui.label(txt("gui.converter.to", "To"));
                    egui::ComboBox::from_id_source("conv_to")
                        .selected_text(self.conv_to.clone())
                        .show_ui(ui, |ui| {
                            for unit in self.state.current_category.units() {
                                ui.selectable_value(
                                    &mut self.conv_to,
                                    unit.id.to_string(),
                                    format!("{} ({})", unit.id, unit.name),
                                );
                            }
                        });
                    ui.end_row();
                });

            ui.horizontal(|ui| {
                if ui.button(txt("gui.converter.swap", "Swap")).clicked() {
                    std::mem::swap(&mut self.conv_from, &mut self.conv_to);
                    if self.conv_result.is_some() {
                        self.run_conversion();
                    }
                }
                if ui.button(txt("gui.converter.convert", "Convert")).clicked() {
                    self.run_conversion();
                }
                if ui.button(txt("gui.converter.reset", "Reset")).clicked() {
                    self.conv_value = 1.0;
                    self.apply_default_units();
                }
            });
        });

        let quick = self.state.current_category.quick_conversions();
        if !quick.is_empty() {
            ui.add_space(6.0);
            ui.label(txt("gui.converter.quick", "Quick conversions"));
            ui.horizontal(|ui| {
                let mut run = false;
                for q in quick {
                    if ui.button(q.label).clicked() {
                        self.conv_from = q.from.to_string();
                        self.conv_to = q.to.to_string();
                        run = true;
                    }
                }
                if run {
                    self.run_conversion();
                }
            });
        }

        if let Some(result) = self.conv_result.clone() {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(result).strong().size(20.0));
            ui.horizontal(|ui| {
                if ui
                    .button(txt("gui.converter.favorite", "Add to favorites"))
                    .clicked()
                {
                    if let Some(id) = self.last_conversion_id {
                        self.status = Some(match self.state.ledger.promote_to_favorite(id) {
                            Ok(()) => self.tr.t(i18n::keys::CONVERTER_ADDED_FAVORITE).to_string(),
                            Err(gas_engineering_toolbox::ledger::LedgerError::AlreadyFavorite(
                                _,
                            )) => self.tr.t(i18n::keys::CONVERTER_ALREADY_FAVORITE).to_string(),
                            Err(e) => e.to_string(),
                        });
                    }
                }
                if ui.button(txt("gui.converter.send", "Send to host")).clicked() {
                    if let Some(id) = self.last_conversion_id {
                        self.send_record_to_host(id);
                    }
                }
            });
        }
    }

    fn ui_blowdown(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.tab.blowdown", "Separator Blowdown"));
        ui.small(txt(
            "gui.calc.record_note",
            "Results are recorded to the calculation history.",
        ));
        ui.add_space(8.0);
        egui::Grid::new("bd_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("V [m3]");
                ui.add(egui::DragValue::new(&mut self.bd_volume).speed(0.5));
                ui.end_row();
                ui.label("p [MPa]");
                ui.add(egui::DragValue::new(&mut self.bd_pressure).speed(0.1));
                ui.end_row();
                ui.label("T [K]");
                ui.add(egui::DragValue::new(&mut self.bd_temperature).speed(1.0));
                ui.end_row();
                ui.label("z");
                ui.add(egui::DragValue::new(&mut self.bd_z).speed(0.01));
                ui.end_row();
                ui.label("n / month");
                ui.add(egui::DragValue::new(&mut self.bd_count).speed(1.0));
                ui.end_row();
            });
        if ui.button(txt("gui.calc.compute", "Compute")).clicked() {
            let result = gas::separator_blowdown(SeparatorBlowdownInput {
                separator_volume_m3: self.bd_volume,
                pressure_mpa: self.bd_pressure,
                temperature_k: self.bd_temperature,
                compressibility: self.bd_z,
                blowdowns_per_month: self.bd_count,
            });
            self.bd_result = Some(format!(
                "{} {:.1} m3\n{} {:.1} m3\n{} {:.1} m3\n{} {:.1} / {:.1} / {:.1} m3",
                self.tr.t(i18n::keys::BLOWDOWN_RESULT_SINGLE),
                result.single_m3,
                self.tr.t(i18n::keys::BLOWDOWN_RESULT_MONTHLY),
                result.monthly_m3,
                self.tr.t(i18n::keys::BLOWDOWN_RESULT_YEARLY),
                result.yearly_m3,
                self.tr.t(i18n::keys::BLOWDOWN_RESULT_BREAKDOWN),
                result.volume_share_m3,
                result.compression_share_m3,
                result.temperature_share_m3,
            ));
            let inputs = fields(&[
                ("separator_volume_m3", self.bd_volume),
                ("pressure_mpa", self.bd_pressure),
                ("temperature_k", self.bd_temperature),
                ("compressibility", self.bd_z),
                ("blowdowns_per_month", f64::from(self.bd_count)),
            ]);
            let outputs = fields(&[
                ("single_m3", result.single_m3),
                ("monthly_m3", result.monthly_m3),
                ("yearly_m3", result.yearly_m3),
                ("volume_share_m3", result.volume_share_m3),
                ("compression_share_m3", result.compression_share_m3),
                ("temperature_share_m3", result.temperature_share_m3),
            ]);
            self.record_calculation(CalculationKind::SeparatorBlowdown, inputs, outputs);
        }
        if let Some(result) = &self.bd_result {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(result.clone()).monospace());
        }
    }

    fn ui_compressor(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.tab.compressor", "Compressor Startup"));
        ui.small(txt(
            "gui.calc.record_note",
            "Results are recorded to the calculation history.",
        ));
        ui.add_space(8.0);
        egui::Grid::new("cs_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("V [m3]");
                ui.add(egui::DragValue::new(&mut self.cs_volume).speed(0.5));
                ui.end_row();
                ui.label("p [MPa]");
                ui.add(egui::DragValue::new(&mut self.cs_pressure).speed(0.1));
                ui.end_row();
                ui.label("T [K]");
                ui.add(egui::DragValue::new(&mut self.cs_temperature).speed(1.0));
                ui.end_row();
                ui.label("z");
                ui.add(egui::DragValue::new(&mut self.cs_z).speed(0.01));
                ui.end_row();
                ui.label("n / month");
                ui.add(egui::DragValue::new(&mut self.cs_count).speed(1.0));
                ui.end_row();
            });
        if ui.button(txt("gui.calc.compute", "Compute")).clicked() {
            let result = gas::compressor_startup(CompressorStartupInput {
                start_line_volume_m3: self.cs_volume,
                pressure_mpa: self.cs_pressure,
                temperature_k: self.cs_temperature,
                compressibility: self.cs_z,
                starts_per_month: self.cs_count,
            });
            self.cs_result = Some(format!(
                "{} {:.1} m3\n{} {:.1} m3\n{} {:.1} m3",
                self.tr.t(i18n::keys::COMPRESSOR_RESULT_SINGLE),
                result.single_m3,
                self.tr.t(i18n::keys::COMPRESSOR_RESULT_MONTHLY),
                result.monthly_m3,
                self.tr.t(i18n::keys::COMPRESSOR_RESULT_YEARLY),
                result.yearly_m3,
            ));
            let inputs = fields(&[
                ("start_line_volume_m3", self.cs_volume),
                ("pressure_mpa", self.cs_pressure),
                ("temperature_k", self.cs_temperature),
                ("compressibility", self.cs_z),
                ("starts_per_month", f64::from(self.cs_count)),
            ]);
            let outputs = fields(&[
                ("single_m3", result.single_m3),
                ("monthly_m3", result.monthly_m3),
                ("yearly_m3", result.yearly_m3),
            ]);
            self.record_calculation(CalculationKind::CompressorStartup, inputs, outputs);
        }
        if let Some(result) = &self.cs_result {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(result.clone()).monospace());
        }
    }

    fn ui_flow(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.tab.flow", "Flow Averaging"));
        ui.small(txt(
            "gui.calc.record_note",
            "Results are recorded to the calculation history.",
        ));
        ui.add_space(8.0);
        egui::Grid::new("fm_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("p max [MPa]");
                ui.add(egui::DragValue::new(&mut self.fm_p_max).speed(0.1));
                ui.end_row();
                ui.label("p min [MPa]");
                ui.add(egui::DragValue::new(&mut self.fm_p_min).speed(0.1));
                ui.end_row();
                ui.label("T max [K]");
                ui.add(egui::DragValue::new(&mut self.fm_t_max).speed(1.0));
                ui.end_row();
                ui.label("T min [K]");
                ui.add(egui::DragValue::new(&mut self.fm_t_min).speed(1.0));
                ui.end_row();
                ui.label("Q [m3/h]");
                ui.add(egui::DragValue::new(&mut self.fm_rate).speed(100.0));
                ui.end_row();
            });
        if ui.button(txt("gui.calc.compute", "Compute")).clicked() {
            let result = gas::flow_measurement(FlowMeasurementInput {
                pressure_max_mpa: self.fm_p_max,
                pressure_min_mpa: self.fm_p_min,
                temperature_max_k: self.fm_t_max,
                temperature_min_k: self.fm_t_min,
                flow_m3_per_h: self.fm_rate,
            });
            self.fm_result = Some(format!(
                "{} {:.3} MPa / {:.2} K\n{} {:.0} / {:.0} / {:.0} m3\n{} {:.2} .. {:.2} °C",
                self.tr.t(i18n::keys::FLOW_RESULT_AVERAGES),
                result.pressure_avg_mpa,
                result.temperature_avg_k,
                self.tr.t(i18n::keys::FLOW_RESULT_THROUGHPUT),
                result.daily_m3,
                result.monthly_m3,
                result.yearly_m3,
                self.tr.t(i18n::keys::FLOW_RESULT_RANGE),
                result.temperature_min_c,
                result.temperature_max_c,
            ));
            let inputs = fields(&[
                ("pressure_max_mpa", self.fm_p_max),
                ("pressure_min_mpa", self.fm_p_min),
                ("temperature_max_k", self.fm_t_max),
                ("temperature_min_k", self.fm_t_min),
                ("flow_m3_per_h", self.fm_rate),
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
            self.record_calculation(CalculationKind::FlowMeasurement, inputs, outputs);
        }
        if let Some(result) = &self.fm_result {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(result.clone()).monospace());
        }
    }

    fn ui_pipeline(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.tab.pipeline", "Pipeline"));
        ui.small(txt(
            "gui.calc.record_note",
            "Results are recorded to the calculation history.",
        ));
        ui.add_space(8.0);
        egui::Grid::new("pl_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("OD [mm]");
                ui.add(egui::DragValue::new(&mut self.pl_od).speed(1.0));
                ui.end_row();
                ui.label("wall [mm]");
                ui.add(egui::DragValue::new(&mut self.pl_wall).speed(0.5));
                ui.end_row();
                ui.label("L [km]");
                ui.add(egui::DragValue::new(&mut self.pl_length).speed(1.0));
                ui.end_row();
                ui.label("p1 [MPa]");
                ui.add(egui::DragValue::new(&mut self.pl_p_start).speed(0.1));
                ui.end_row();
                ui.label("p2 [MPa]");
                ui.add(egui::DragValue::new(&mut self.pl_p_end).speed(0.1));
                ui.end_row();
                ui.label("Q [mln m3/day]");
                ui.add(egui::DragValue::new(&mut self.pl_flow).speed(0.5));
                ui.end_row();
                ui.label("T [K]");
                ui.add(egui::DragValue::new(&mut self.pl_temperature).speed(1.0));
                ui.end_row();
                ui.label("z");
                ui.add(egui::DragValue::new(&mut self.pl_z).speed(0.01));
                ui.end_row();
            });
        if ui.button(txt("gui.calc.compute", "Compute")).clicked() {
            let result = gas::pipeline_inventory(PipelineInventoryInput {
                outer_diameter_mm: self.pl_od,
                wall_thickness_mm: self.pl_wall,
                length_km: self.pl_length,
                pressure_start_mpa: self.pl_p_start,
                pressure_end_mpa: self.pl_p_end,
                flow_mln_m3_per_day: self.pl_flow,
                temperature_k: self.pl_temperature,
                compressibility: self.pl_z,
            });
            self.pl_result = Some(format!(
                "{} {:.1} mm / {:.4} m2 / {:.1} m3\n{} {:.2} m/s\n{} {:.0} m3",
                self.tr.t(i18n::keys::PIPELINE_RESULT_GEOMETRY),
                result.inner_diameter_mm,
                result.cross_section_m2,
                result.geometric_volume_m3,
                self.tr.t(i18n::keys::PIPELINE_RESULT_VELOCITY),
                result.gas_velocity_m_per_s,
                self.tr.t(i18n::keys::PIPELINE_RESULT_INVENTORY),
                result.inventory_m3,
            ));
            let inputs = fields(&[
                ("outer_diameter_mm", self.pl_od),
                ("wall_thickness_mm", self.pl_wall),
                ("length_km", self.pl_length),
                ("pressure_start_mpa", self.pl_p_start),
                ("pressure_end_mpa", self.pl_p_end),
                ("flow_mln_m3_per_day", self.pl_flow),
                ("temperature_k", self.pl_temperature),
                ("compressibility", self.pl_z),
            ]);
            let outputs = fields(&[
                ("inner_diameter_mm", result.inner_diameter_mm),
                ("cross_section_m2", result.cross_section_m2),
                ("geometric_volume_m3", result.geometric_volume_m3),
                ("gas_velocity_m_per_s", result.gas_velocity_m_per_s),
                ("average_pressure_mpa", result.average_pressure_mpa),
                ("inventory_m3", result.inventory_m3),
            ]);
            self.record_calculation(CalculationKind::PipelineInventory, inputs, outputs);
        }
        if let Some(result) = &self.pl_result {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(result.clone()).monospace());
        }
    }

    fn ui_ledger(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        ui.heading(txt("gui.ledger.history_heading", "Conversion history"));
        let mut promote_id = None;
        let mut send_id = None;
        if self.state.ledger.history().is_empty() {
            ui.label(txt("gui.ledger.empty", "No records."));
        }
        for rec in self.state.ledger.history() {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} {} → {} {} ({})",
                    rec.input_value,
                    rec.from_unit,
                    conversion::format_result(rec.category, rec.result),
                    rec.to_unit,
                    rec.created_at
                ));
                if ui.small_button(txt("gui.ledger.promote", "Favorite")).clicked() {
                    promote_id = Some(rec.id);
                }
                if ui.small_button(txt("gui.converter.send", "Send to host")).clicked() {
                    send_id = Some(rec.id);
                }
            });
        }
        if let Some(id) = promote_id {
            self.status = Some(match self.state.ledger.promote_to_favorite(id) {
                Ok(()) => self.tr.t(i18n::keys::CONVERTER_ADDED_FAVORITE).to_string(),
                Err(gas_engineering_toolbox::ledger::LedgerError::AlreadyFavorite(_)) => {
                    self.tr.t(i18n::keys::CONVERTER_ALREADY_FAVORITE).to_string()
                }
                Err(e) => e.to_string(),
            });
        }
        if let Some(id) = send_id {
            self.send_record_to_host(id);
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if !self.confirm_clear {
                if ui.button(txt("gui.ledger.clear", "Clear history")).clicked() {
                    self.confirm_clear = true;
                }
            } else {
                ui.label(txt("gui.ledger.confirm_clear", "Clear all conversion history?"));
                if ui.button(txt("gui.ledger.yes", "Clear")).clicked() {
                    self.status = Some(match self.state.ledger.clear_history() {
                        Ok(()) => self.tr.t(i18n::keys::HISTORY_CLEARED).to_string(),
                        Err(e) => e.to_string(),
                    });
                    self.confirm_clear = false;
                }
                if ui.button(txt("gui.ledger.no", "Keep")).clicked() {
                    self.confirm_clear = false;
                }
            }
            if ui
                .button(txt("gui.ledger.export_history", "Export history CSV"))
                .clicked()
            {
                self.export_csv(export::history_csv(self.state.ledger.history()), "history.csv");
            }
            if ui
                .button(txt("gui.ledger.export_calcs", "Export calculations CSV"))
                .clicked()
            {
                self.export_csv(
                    export::calculations_csv(self.state.ledger.calculations()),
                    "calculations.csv",
                );
            }
        });

        ui.separator();
        ui.heading(txt("gui.ledger.favorites_heading", "Favorites"));
        if self.state.ledger.favorites().is_empty() {
            ui.label(txt("gui.ledger.empty", "No records."));
        }
        let mut use_record = None;
        for rec in self.state.ledger.favorites() {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} {} → {} ({})",
                    rec.input_value,
                    rec.from_unit,
                    rec.to_unit,
                    rec.category.as_str()
                ));
                if ui.small_button(txt("gui.ledger.use", "Use")).clicked() {
                    use_record = Some(rec.clone());
                }
            });
        }
        if let Some(rec) = use_record {
            // 재생: 카테고리 전환 + 필드 채움 + 재변환
            self.state.current_category = rec.category;
            self.conv_value = rec.input_value;
            self.conv_from = rec.from_unit.clone();
            self.conv_to = rec.to_unit.clone();
            self.run_conversion();
            self.tab = Tab::Converter;
        }

        ui.separator();
        ui.heading(txt("gui.ledger.calc_heading", "Calculations"));
        if self.state.ledger.calculations().is_empty() {
            ui.label(txt("gui.ledger.empty", "No records."));
        }
        for rec in self.state.ledger.calculations().iter().take(20) {
            ui.label(format!("{} — {}", rec.kind.as_str(), rec.timestamp));
        }
    }

    fn export_csv(&mut self, csv: String, file_name: &str) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        if let Some(path) = FileDialog::new().set_file_name(file_name).save_file() {
            self.status = Some(match fs::write(&path, csv) {
                Ok(()) => format!("{} {}", txt("gui.ledger.exported", "Exported:"), path.display()),
                Err(e) => e.to_string(),
            });
        }
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.settings.heading", "Settings"));
        ui.add_space(8.0);

        let mut dark = self.state.theme == Theme::Dark;
        if ui
            .checkbox(&mut dark, txt("gui.settings.theme", "Dark theme"))
            .changed()
        {
            let next = if dark { Theme::Dark } else { Theme::Light };
            if let Err(e) = self.state.set_theme(next) {
                self.status = Some(e.to_string());
            }
        }

        ui.horizontal(|ui| {
            ui.label(txt("gui.settings.language", "Language code"));
            ui.text_edit_singleline(&mut self.lang_input);
            if ui.button(txt("gui.settings.apply", "Apply")).clicked() {
                let resolved = i18n::resolve_language(&self.lang_input, None);
                self.config.language = resolved.clone();
                self.tr = i18n::Translator::new_with_pack(&resolved, None);
                self.status = Some(match self.config.save() {
                    Ok(()) => self.tr.t(i18n::keys::SETTINGS_SAVED).to_string(),
                    Err(e) => e.to_string(),
                });
            }
        });

        ui.horizontal(|ui| {
            ui.label(txt("gui.settings.data_dir", "Data directory"));
            ui.monospace(self.config.resolved_data_dir().display().to_string());
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.set_visuals(match self.state.theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        });

        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Gas Engineering Toolbox"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(status) = &self.status {
                        ui.label(egui::RichText::new(status.clone()).italics());
                    }
                });
            });
        });

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Converter => self.ui_converter(ui),
                    Tab::Blowdown => self.ui_blowdown(ui),
                    Tab::Compressor => self.ui_compressor(ui),
                    Tab::Flow => self.ui_flow(ui),
                    Tab::Pipeline => self.ui_pipeline(ui),
                    Tab::Ledger => self.ui_ledger(ui),
                    Tab::Settings => self.ui_settings(ui),
                });
        });
    }
}
