//! Core types for classification verdicts and provider scores.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The binary classification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prediction {
    Clean,
    Defective,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Defective => "defective",
        }
    }
}

/// Which pipeline stage produced a verdict. Audit field — must always be
/// truthful about how the decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionSource {
    /// An explicitly-safe bounded API matched.
    SafeApiOverride,
    /// A defensive coding idiom matched.
    StructuralCleanOverride,
    /// An unconditionally unsafe API or idiom matched.
    ManualChecker,
    /// A dangerous API survived the override stages and outvoted the model.
    StaticRule,
    /// Model defect probability at or above the decision threshold.
    MlHighConfidence,
    /// Model defect probability below the decision threshold.
    MlLowConfidence,
}

impl DecisionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SafeApiOverride => "safe_api_override",
            Self::StructuralCleanOverride => "structural_clean_override",
            Self::ManualChecker => "manual_checker",
            Self::StaticRule => "static_rule",
            Self::MlHighConfidence => "ml_high_confidence",
            Self::MlLowConfidence => "ml_low_confidence",
        }
    }
}

/// The classification result for one snippet — the universal output type.
///
/// For rule short-circuit verdicts the two probabilities are fixed confidence
/// constants and need not sum to 1.0; on the model path they are the
/// provider's calibrated probabilities and do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub prediction: Prediction,
    pub clean_probability: f64,
    pub defect_probability: f64,
    pub decision_source: DecisionSource,
}

/// One (label, probability) entry from a score provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub probability: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}

/// Raw provider output for one snippet: exactly two entries, in whatever
/// order the provider emits them. Canonicalized by the analysis crate
/// before use.
pub type ScorePair = SmallVec<[LabelScore; 2]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_serializes_with_wire_field_names() {
        let verdict = Verdict {
            prediction: Prediction::Defective,
            clean_probability: 0.3,
            defect_probability: 0.7,
            decision_source: DecisionSource::MlHighConfidence,
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["prediction"], "defective");
        assert_eq!(json["clean_probability"], 0.3);
        assert_eq!(json["defect_probability"], 0.7);
        assert_eq!(json["decision_source"], "ml_high_confidence");
    }

    #[test]
    fn test_decision_source_tags_round_trip() {
        for source in [
            DecisionSource::SafeApiOverride,
            DecisionSource::StructuralCleanOverride,
            DecisionSource::ManualChecker,
            DecisionSource::StaticRule,
            DecisionSource::MlHighConfidence,
            DecisionSource::MlLowConfidence,
        ] {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.as_str()));
            let back: DecisionSource = serde_json::from_str(&json).unwrap();
            assert_eq!(back, source);
        }
    }
}
