//! 원장/저장소 회귀 테스트.
use gas_engineering_toolbox::catalog::Category;
use gas_engineering_toolbox::export;
use gas_engineering_toolbox::host::ResultPayload;
use gas_engineering_toolbox::ledger::{
    fields, CalculationKind, Ledger, LedgerError, CALCULATION_CAPACITY, HISTORY_CAPACITY,
};
use gas_engineering_toolbox::state::{AppState, Theme};
use gas_engineering_toolbox::storage::{keys, FileStorage, MemoryStorage, Storage};

fn ledger_with_memory() -> Ledger<MemoryStorage> {
    let (ledger, issues) = Ledger::load(MemoryStorage::new()).expect("load");
    assert!(issues.is_empty());
    ledger
}

fn record_one(ledger: &mut Ledger<MemoryStorage>, value: f64) -> i64 {
    let record = ledger.new_conversion(Category::Length, value, "km", value * 0.621371, "mile");
    let id = record.id;
    ledger.record_conversion(record).expect("record");
    id
}

#[test]
fn history_is_bounded_and_newest_first() {
    let mut ledger = ledger_with_memory();
    let mut ids = Vec::new();
    for i in 0..11 {
        ids.push(record_one(&mut ledger, f64::from(i)));
    }
    assert_eq!(ledger.history().len(), HISTORY_CAPACITY);
    // 최신 기록이 항상 맨 앞
    assert_eq!(ledger.history()[0].id, ids[10]);
    // 11번째 기록이 가장 오래된 것을 밀어낸다
    assert!(ledger.history().iter().all(|r| r.id != ids[0]));
    assert_eq!(ledger.history().last().unwrap().id, ids[1]);
}

#[test]
fn ids_are_monotonic() {
    let mut ledger = ledger_with_memory();
    let a = record_one(&mut ledger, 1.0);
    let b = record_one(&mut ledger, 2.0);
    let c = record_one(&mut ledger, 3.0);
    assert!(a < b && b < c);
}

#[test]
fn promote_is_idempotent_in_effect() {
    let mut ledger = ledger_with_memory();
    let id = record_one(&mut ledger, 1.0);
    ledger.promote_to_favorite(id).expect("first promote");
    match ledger.promote_to_favorite(id) {
        Err(LedgerError::AlreadyFavorite(dup)) => assert_eq!(dup, id),
        other => panic!("expected AlreadyFavorite, got {other:?}"),
    }
    assert_eq!(ledger.favorites().len(), 1);
    // 승격은 복사이므로 이력에도 그대로 남는다
    assert!(ledger.history().iter().any(|r| r.id == id));
}

#[test]
fn promote_unknown_id_is_not_found() {
    let mut ledger = ledger_with_memory();
    match ledger.promote_to_favorite(42) {
        Err(LedgerError::NotFound(id)) => assert_eq!(id, 42),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(ledger.favorites().is_empty());
}

#[test]
fn recall_favorite_finds_promoted_record() {
    let mut ledger = ledger_with_memory();
    let id = record_one(&mut ledger, 7.0);
    ledger.promote_to_favorite(id).expect("promote");
    let record = ledger.recall_favorite(id).expect("recall");
    assert_eq!(record.input_value, 7.0);
    assert!(matches!(
        ledger.recall_favorite(id + 1),
        Err(LedgerError::NotFound(_))
    ));
}

#[test]
fn clear_history_keeps_favorites() {
    let mut ledger = ledger_with_memory();
    let id = record_one(&mut ledger, 1.0);
    ledger.promote_to_favorite(id).expect("promote");
    ledger.clear_history().expect("clear");
    assert!(ledger.history().is_empty());
    assert_eq!(ledger.favorites().len(), 1);
}

#[test]
fn calculations_are_bounded() {
    let mut ledger = ledger_with_memory();
    for i in 0..(CALCULATION_CAPACITY + 1) {
        let record = ledger.new_calculation(
            CalculationKind::SeparatorBlowdown,
            fields(&[("separator_volume_m3", i as f64)]),
            fields(&[("single_m3", 1.0)]),
            None,
        );
        ledger.record_calculation(record).expect("record");
    }
    assert_eq!(ledger.calculations().len(), CALCULATION_CAPACITY);
    // 최신 기록이 맨 앞
    assert_eq!(
        ledger.calculations()[0].inputs["separator_volume_m3"],
        CALCULATION_CAPACITY as f64
    );
}

#[test]
fn calculation_defaults_to_anonymous_user() {
    let mut ledger = ledger_with_memory();
    let record = ledger.new_calculation(
        CalculationKind::FlowMeasurement,
        fields(&[]),
        fields(&[]),
        None,
    );
    assert_eq!(record.user_id, "anonymous");
    let named = ledger.new_calculation(
        CalculationKind::FlowMeasurement,
        fields(&[]),
        fields(&[]),
        Some("operator-7"),
    );
    assert_eq!(named.user_id, "operator-7");
}

#[test]
fn corrupt_key_is_reported_and_defaults_to_empty() {
    let mut storage = MemoryStorage::new();
    storage.set(keys::HISTORY, "not a json array").expect("set");
    let (ledger, issues) = Ledger::load(storage).expect("load");
    assert!(ledger.history().is_empty());
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].key, keys::HISTORY);
}

#[test]
fn absent_keys_load_silently() {
    let (ledger, issues) = Ledger::load(MemoryStorage::new()).expect("load");
    assert!(issues.is_empty());
    assert!(ledger.history().is_empty());
    assert!(ledger.favorites().is_empty());
    assert!(ledger.calculations().is_empty());
}

#[test]
fn file_storage_survives_reload() {
    let dir = std::env::temp_dir().join(format!("gas_toolbox_reload_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let storage = FileStorage::open(&dir).expect("open");
    let (mut ledger, _) = Ledger::load(storage).expect("load");
    let record = ledger.new_conversion(Category::Weight, 2.0, "kg", 4.40925, "lb");
    let id = record.id;
    ledger.record_conversion(record).expect("record");
    ledger.promote_to_favorite(id).expect("promote");
    drop(ledger);

    let storage = FileStorage::open(&dir).expect("reopen");
    let (reloaded, issues) = Ledger::load(storage).expect("reload");
    assert!(issues.is_empty());
    assert_eq!(reloaded.history().len(), 1);
    assert_eq!(reloaded.favorites().len(), 1);
    assert_eq!(reloaded.history()[0].id, id);
    assert_eq!(reloaded.history()[0].from_unit, "kg");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn theme_round_trips_through_storage() {
    let dir = std::env::temp_dir().join(format!("gas_toolbox_theme_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let storage = FileStorage::open(&dir).expect("open");
    let (mut state, _) = AppState::load(storage, Category::Length).expect("load");
    assert_eq!(state.theme, Theme::Light);
    state.set_theme(Theme::Dark).expect("set theme");

    let storage = FileStorage::open(&dir).expect("reopen");
    let (state, _) = AppState::load(storage, Category::Length).expect("reload");
    assert_eq!(state.theme, Theme::Dark);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn conversion_record_serializes_with_stable_field_names() {
    let mut ledger = ledger_with_memory();
    let id = record_one(&mut ledger, 1.0);
    let json = serde_json::to_value(&ledger.history()[0]).expect("serialize");
    assert_eq!(json["id"], id);
    assert_eq!(json["inputValue"], 1.0);
    assert_eq!(json["fromUnit"], "km");
    assert_eq!(json["toUnit"], "mile");
    assert_eq!(json["category"], "length");
    assert!(json["createdAt"].is_string());
}

#[test]
fn host_payload_uses_action_tag() {
    let mut ledger = ledger_with_memory();
    record_one(&mut ledger, 3.0);
    let payload = ResultPayload::from_conversion(&ledger.history()[0]);
    let json = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(json["action"], "conversion");
    assert_eq!(json["value"], 3.0);
    assert_eq!(json["fromUnit"], "km");
    assert!(json["convertedValue"].is_number());

    let calc = ledger.new_calculation(
        CalculationKind::PipelineInventory,
        fields(&[]),
        fields(&[("inventory_m3", 1.0)]),
        None,
    );
    let json = serde_json::to_value(ResultPayload::from_calculation(&calc)).expect("serialize");
    assert_eq!(json["action"], "calculation");
    assert_eq!(json["kind"], "pipeline_inventory");
}

#[test]
fn csv_export_has_headers_and_rows() {
    let mut ledger = ledger_with_memory();
    record_one(&mut ledger, 1.0);
    let csv = export::history_csv(ledger.history());
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,createdAt,inputValue,fromUnit,result,toUnit,category"
    );
    assert_eq!(lines.count(), 1);

    let record = ledger.new_calculation(
        CalculationKind::SeparatorBlowdown,
        fields(&[("pressure_mpa", 1.2)]),
        fields(&[("single_m3", 187.1)]),
        None,
    );
    ledger.record_calculation(record).expect("record");
    let csv = export::calculations_csv(ledger.calculations());
    assert!(csv.starts_with("id,kind,timestamp,userId,inputs,outputs\n"));
    assert!(csv.contains("separator_blowdown"));
    assert!(csv.contains("pressure_mpa=1.2"));
}
