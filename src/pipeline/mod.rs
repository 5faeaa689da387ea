// src/pipeline/mod.rs
mod builder;
mod config;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::ExportConfig;
pub use orchestrator::ReportPipeline;
