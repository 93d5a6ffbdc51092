//! 가스 수송 공학 계산 모듈 모음.

pub mod blowdown;
pub mod compressor;
pub mod flow;
pub mod gas_law;
pub mod pipeline;

pub use blowdown::{separator_blowdown, SeparatorBlowdownInput, SeparatorBlowdownResult};
pub use compressor::{compressor_startup, CompressorStartupInput, CompressorStartupResult};
pub use flow::{flow_measurement, FlowMeasurementInput, FlowMeasurementResult};
pub use pipeline::{
    final_pressure, pipeline_capacity, pipeline_inventory, PipelineCapacityInput,
    PipelineCapacityResult, PipelineInventoryInput, PipelineInventoryResult,
};
