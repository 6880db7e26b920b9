//! # vigil-core
//!
//! Foundation crate for the Vigil defect classifier.
//! Defines the verdict and score types, the `ScoreProvider` trait,
//! the error taxonomy, pipeline configuration, and tracing setup.
//! The analysis crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PipelineConfig;
pub use errors::error_code::VigilErrorCode;
pub use errors::{ClassifyError, ConfigError, RuleSetError};
pub use traits::ScoreProvider;
pub use types::{DecisionSource, LabelScore, Prediction, ScorePair, Verdict};
