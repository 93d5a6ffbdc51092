//! 가스 공학 계산 회귀 테스트. 기대값은 이상기체 관계식
//! n = pV/(zRT), V₀ = nRT₀/p₀ (T₀=293.15 K, p₀=101325 Pa)에서 유도했다.
use gas_engineering_toolbox::gas::{
    self, gas_law, CompressorStartupInput, FlowMeasurementInput, PipelineCapacityInput,
    PipelineInventoryInput, SeparatorBlowdownInput,
};

#[test]
fn blowdown_reference_case() {
    // V=15 m3, p=1.2 MPa, T=293 K, z=0.95 → 1회 약 187.1 m3 (표준상태)
    let result = gas::separator_blowdown(SeparatorBlowdownInput {
        separator_volume_m3: 15.0,
        pressure_mpa: 1.2,
        temperature_k: 293.0,
        compressibility: 0.95,
        blowdowns_per_month: 4,
    });
    let expected = 15.0 * (1.2e6 / 101_325.0) * (293.15 / 293.0) / 0.95;
    assert!(
        (result.single_m3 - expected).abs() < 1e-6,
        "single={} expected={expected}",
        result.single_m3
    );
    assert!((result.single_m3 - 187.09).abs() < 0.05);
    assert!((result.monthly_m3 - result.single_m3 * 4.0).abs() < 1e-9);
    assert!((result.yearly_m3 - result.monthly_m3 * 12.0).abs() < 1e-9);
}

#[test]
fn blowdown_breakdown_sums_to_total() {
    let result = gas::separator_blowdown(SeparatorBlowdownInput {
        separator_volume_m3: 15.0,
        pressure_mpa: 1.2,
        temperature_k: 293.0,
        compressibility: 0.95,
        blowdowns_per_month: 1,
    });
    let sum =
        result.volume_share_m3 + result.compression_share_m3 + result.temperature_share_m3;
    assert!((sum - result.single_m3).abs() < 1e-9);
    assert_eq!(result.volume_share_m3, 15.0);
}

#[test]
fn non_physical_inputs_fall_back_to_defaults() {
    // z=0, T=0 은 기본값(0.95, 293.15 K)으로 대체된다.
    let defaulted = gas_law::normal_volume(10.0, 2.0, 0.0, 0.0);
    let explicit = gas_law::normal_volume(10.0, 2.0, 293.15, 0.95);
    assert!((defaulted - explicit).abs() < 1e-9);
}

#[test]
fn compressor_startup_matches_gas_law() {
    let input = CompressorStartupInput {
        start_line_volume_m3: 8.0,
        pressure_mpa: 4.5,
        temperature_k: 288.0,
        compressibility: 0.9,
        starts_per_month: 2,
    };
    let result = gas::compressor_startup(input);
    let expected = 8.0 * (4.5e6 / 101_325.0) * (293.15 / 288.0) / 0.9;
    assert!((result.single_m3 - expected).abs() < 1e-6);
    assert!((result.monthly_m3 - expected * 2.0).abs() < 1e-9);
    assert!((result.yearly_m3 - expected * 24.0).abs() < 1e-6);
}

#[test]
fn flow_measurement_averages_and_calendar_multipliers() {
    let result = gas::flow_measurement(FlowMeasurementInput {
        pressure_max_mpa: 5.4,
        pressure_min_mpa: 5.0,
        temperature_max_k: 295.0,
        temperature_min_k: 285.0,
        flow_m3_per_h: 12_000.0,
    });
    assert!((result.pressure_avg_mpa - 5.2).abs() < 1e-12);
    assert!((result.temperature_avg_k - 290.0).abs() < 1e-12);
    assert!((result.daily_m3 - 288_000.0).abs() < 1e-9);
    assert!((result.monthly_m3 - 8_640_000.0).abs() < 1e-9);
    assert!((result.yearly_m3 - 103_680_000.0).abs() < 1e-6);
    assert!((result.temperature_min_c - 11.85).abs() < 1e-9);
    assert!((result.temperature_max_c - 21.85).abs() < 1e-9);
}

#[test]
fn pipeline_inventory_geometry_and_gas_content() {
    let result = gas::pipeline_inventory(PipelineInventoryInput {
        outer_diameter_mm: 720.0,
        wall_thickness_mm: 10.0,
        length_km: 25.0,
        pressure_start_mpa: 5.4,
        pressure_end_mpa: 4.9,
        flow_mln_m3_per_day: 12.0,
        temperature_k: 288.0,
        compressibility: 0.9,
    });
    assert_eq!(result.inner_diameter_mm, 700.0);
    let area = std::f64::consts::PI * 0.7 * 0.7 / 4.0;
    assert!((result.cross_section_m2 - area).abs() < 1e-12);
    assert!((result.geometric_volume_m3 - area * 25_000.0).abs() < 1e-6);
    assert!((result.average_pressure_mpa - 5.15).abs() < 1e-12);

    let expected_inventory =
        result.geometric_volume_m3 * (5.15 / 0.101_325) * (293.15 / 288.0) / 0.9;
    assert!(
        (result.inventory_m3 - expected_inventory).abs() / expected_inventory < 1e-9,
        "inventory={}",
        result.inventory_m3
    );

    // 표준상태 유량을 운전 조건으로 보정한 유속
    let q_work = (12.0e6 / 86_400.0) * (0.101_325 / 5.15) * (288.0 / 293.15);
    let expected_velocity = q_work / area;
    assert!((result.gas_velocity_m_per_s - expected_velocity).abs() < 1e-9);
    assert!(result.gas_velocity_m_per_s > 0.0);
}

#[test]
fn pipeline_capacity_positive_and_monotonic_in_pressure_drop() {
    let base = PipelineCapacityInput {
        inner_diameter_mm: 700.0,
        pressure_start_mpa: 5.4,
        pressure_end_mpa: 4.9,
        length_km: 25.0,
        temperature_k: 288.0,
        compressibility: 0.9,
        friction_lambda: 0.0,
    };
    let q1 = gas::pipeline_capacity(base.clone()).capacity_mln_m3_per_day;
    let q2 = gas::pipeline_capacity(PipelineCapacityInput {
        pressure_end_mpa: 4.5,
        ..base
    })
    .capacity_mln_m3_per_day;
    assert!(q1 > 0.0);
    assert!(q2 > q1, "larger pressure drop must pass more gas");
}

#[test]
fn final_pressure_decreases_with_flow() {
    let p_low = gas::final_pressure(700.0, 5.4, 5.0, 25.0, 288.0, 0.9);
    let p_high = gas::final_pressure(700.0, 5.4, 20.0, 25.0, 288.0, 0.9);
    assert!(p_low < 5.4);
    assert!(p_high < p_low);
    assert!(p_high >= 0.0);
}

#[test]
fn zero_flow_keeps_start_pressure() {
    let p = gas::final_pressure(700.0, 5.4, 0.0, 25.0, 288.0, 0.9);
    assert!((p - 5.4).abs() < 1e-9);
}
