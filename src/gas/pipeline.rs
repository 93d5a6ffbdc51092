use super::gas_law::{self, GAS_CONSTANT, NORMAL_PRESSURE_MPA, NORMAL_TEMPERATURE_K};

/// 관로 구간 가스 재고(인벤토리) 계산 입력.
#[derive(Debug, Clone)]
pub struct PipelineInventoryInput {
    pub outer_diameter_mm: f64,
    pub wall_thickness_mm: f64,
    pub length_km: f64,
    pub pressure_start_mpa: f64,
    pub pressure_end_mpa: f64,
    /// 표준상태 기준 수송량 [백만 m³/일]
    pub flow_mln_m3_per_day: f64,
    pub temperature_k: f64,
    /// 0 이하이면 기본값 0.95 적용
    pub compressibility: f64,
}

/// 관로 기하와 가스 재고 결과.
#[derive(Debug, Clone)]
pub struct PipelineInventoryResult {
    pub inner_diameter_mm: f64,
    pub cross_section_m2: f64,
    pub geometric_volume_m3: f64,
    pub gas_velocity_m_per_s: f64,
    pub average_pressure_mpa: f64,
    /// 표준상태 환산 관내 가스량 [m³]
    pub inventory_m3: f64,
}

/// 관로 기하 체적, 운전 조건 유속, 관내 가스 재고를 계산한다.
/// 평균 압력은 시·종점의 산술 평균을 쓴다.
pub fn pipeline_inventory(input: PipelineInventoryInput) -> PipelineInventoryResult {
    let inner_mm = (input.outer_diameter_mm - 2.0 * input.wall_thickness_mm).max(0.0);
    let d_m = inner_mm / 1000.0;
    let area = std::f64::consts::PI * d_m * d_m / 4.0;
    let volume = area * input.length_km * 1000.0;
    let p_avg = (input.pressure_start_mpa + input.pressure_end_mpa) / 2.0;
    let t = gas_law::effective_temperature(input.temperature_k);

    // 표준상태 유량을 운전 조건 유량으로 보정한 뒤 단면적으로 나눈다.
    let q_norm_m3_s = input.flow_mln_m3_per_day * 1e6 / 86_400.0;
    let velocity = if area > 0.0 && p_avg > 0.0 {
        let q_work = q_norm_m3_s * (NORMAL_PRESSURE_MPA / p_avg) * (t / NORMAL_TEMPERATURE_K);
        q_work / area
    } else {
        0.0
    };

    let inventory = gas_law::normal_volume(volume, p_avg, t, input.compressibility);
    PipelineInventoryResult {
        inner_diameter_mm: inner_mm,
        cross_section_m2: area,
        geometric_volume_m3: volume,
        gas_velocity_m_per_s: velocity,
        average_pressure_mpa: p_avg,
        inventory_m3: inventory,
    }
}

/// 관로 통과능력 계산 입력 (등온 유동).
#[derive(Debug, Clone)]
pub struct PipelineCapacityInput {
    pub inner_diameter_mm: f64,
    pub pressure_start_mpa: f64,
    pub pressure_end_mpa: f64,
    pub length_km: f64,
    pub temperature_k: f64,
    /// 0 이하이면 기본값 0.95 적용
    pub compressibility: f64,
    /// 수력 저항 계수 λ, 0 이하이면 전형값 0.01 적용
    pub friction_lambda: f64,
}

/// 통과능력 결과.
#[derive(Debug, Clone)]
pub struct PipelineCapacityResult {
    pub capacity_mln_m3_per_day: f64,
}

const DEFAULT_FRICTION_LAMBDA: f64 = 0.01;

/// 등온 유동 관계식으로 구간 통과능력을 계산한다.
pub fn pipeline_capacity(input: PipelineCapacityInput) -> PipelineCapacityResult {
    let d_m = input.inner_diameter_mm / 1000.0;
    let p1_pa = input.pressure_start_mpa * 1e6;
    let p2_pa = input.pressure_end_mpa * 1e6;
    let l_m = input.length_km * 1000.0;
    let t = gas_law::effective_temperature(input.temperature_k);
    let z = gas_law::effective_compressibility(input.compressibility);
    let lambda = if input.friction_lambda > 0.0 {
        input.friction_lambda
    } else {
        DEFAULT_FRICTION_LAMBDA
    };

    let numerator = (p1_pa * p1_pa - p2_pa * p2_pa) * d_m.powi(5);
    let denominator = lambda * z * GAS_CONSTANT * t * l_m;
    let capacity = if denominator > 0.0 && numerator > 0.0 {
        let q_m3_s = 0.03848 * (numerator / denominator).sqrt();
        q_m3_s * 86_400.0 / 1e6
    } else {
        0.0
    };
    PipelineCapacityResult {
        capacity_mln_m3_per_day: capacity,
    }
}

/// 시점 압력과 수송량으로부터 구간 종점 압력 [MPa]을 계산한다.
/// 해가 음수가 되는 조건은 0으로 클램프한다.
pub fn final_pressure(
    inner_diameter_mm: f64,
    pressure_start_mpa: f64,
    flow_mln_m3_per_day: f64,
    length_km: f64,
    temperature_k: f64,
    compressibility: f64,
) -> f64 {
    let d_m = inner_diameter_mm / 1000.0;
    if d_m <= 0.0 {
        return 0.0;
    }
    let q_m3_s = flow_mln_m3_per_day * 1e6 / 86_400.0;
    let p1_pa = pressure_start_mpa * 1e6;
    let l_m = length_km * 1000.0;
    let t = gas_law::effective_temperature(temperature_k);
    let z = gas_law::effective_compressibility(compressibility);

    let drop = DEFAULT_FRICTION_LAMBDA * z * GAS_CONSTANT * t * l_m * q_m3_s * q_m3_s / d_m.powi(5);
    let p2_sq = (p1_pa * p1_pa - drop).max(0.0);
    p2_sq.sqrt() / 1e6
}
