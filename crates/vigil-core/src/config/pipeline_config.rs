//! Arbitration configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for the classifier pipeline's arbitration constants.
///
/// The defaults are the calibrated values the classifier shipped with.
/// None of them has a documented derivation — treat them as tunable
/// parameters, not inferred ground truth.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Model defect probability at or above which the model path predicts
    /// defective. Default: 0.60. Asymmetric by intent — biases toward fewer
    /// false "defective" calls from the model alone.
    pub defect_threshold: Option<f64>,
    /// Clean probability reported for structural-clean matches. Default: 0.9.
    pub structural_clean_probability: Option<f64>,
    /// Defect probability reported for structural-clean matches. Default: 0.1.
    /// Stored separately rather than computed as a complement so the wire
    /// values stay exact.
    pub structural_defect_probability: Option<f64>,
}

impl PipelineConfig {
    /// Returns the effective defect threshold, defaulting to 0.60.
    pub fn effective_defect_threshold(&self) -> f64 {
        self.defect_threshold.unwrap_or(0.60)
    }

    /// Returns the effective structural-clean clean probability, defaulting to 0.9.
    pub fn effective_structural_clean_probability(&self) -> f64 {
        self.structural_clean_probability.unwrap_or(0.9)
    }

    /// Returns the effective structural-clean defect probability, defaulting to 0.1.
    pub fn effective_structural_defect_probability(&self) -> f64 {
        self.structural_defect_probability.unwrap_or(0.1)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded pipeline config");
        Ok(config)
    }
}
