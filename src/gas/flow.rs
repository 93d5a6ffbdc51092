/// 유량 측정 구간 평균화 계산 입력.
#[derive(Debug, Clone)]
pub struct FlowMeasurementInput {
    pub pressure_max_mpa: f64,
    pub pressure_min_mpa: f64,
    pub temperature_max_k: f64,
    pub temperature_min_k: f64,
    pub flow_m3_per_h: f64,
}

/// 평균값과 달력 배수(24시간/30일/12개월) 기반 처리량.
#[derive(Debug, Clone)]
pub struct FlowMeasurementResult {
    pub pressure_avg_mpa: f64,
    pub temperature_avg_k: f64,
    pub daily_m3: f64,
    pub monthly_m3: f64,
    pub yearly_m3: f64,
    /// 표시용 섭씨 환산 온도 범위
    pub temperature_min_c: f64,
    pub temperature_max_c: f64,
}

/// 최대/최소 압력·온도의 산술 중간값과 일/월/년 가스 처리량을 계산한다.
pub fn flow_measurement(input: FlowMeasurementInput) -> FlowMeasurementResult {
    let daily = input.flow_m3_per_h * 24.0;
    let monthly = daily * 30.0;
    FlowMeasurementResult {
        pressure_avg_mpa: (input.pressure_max_mpa + input.pressure_min_mpa) / 2.0,
        temperature_avg_k: (input.temperature_max_k + input.temperature_min_k) / 2.0,
        daily_m3: daily,
        monthly_m3: monthly,
        yearly_m3: monthly * 12.0,
        temperature_min_c: input.temperature_min_k - 273.15,
        temperature_max_c: input.temperature_max_k - 273.15,
    }
}
