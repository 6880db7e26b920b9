//! Pipeline configuration.

pub mod pipeline_config;

pub use pipeline_config::PipelineConfig;
