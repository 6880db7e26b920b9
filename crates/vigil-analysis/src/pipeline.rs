//! `ClassifierPipeline` — ordered, short-circuiting arbitration between
//! override rules, static rules, and the score provider.
//!
//! Stage order is the decision policy, not an implementation detail:
//! known-safe idioms are checked first to suppress model false positives,
//! unconditional defects next because they must never be downgraded by the
//! model, and only snippets ambiguous under the rules are scored.

use vigil_core::config::PipelineConfig;
use vigil_core::errors::{ClassifyError, RuleSetError};
use vigil_core::traits::ScoreProvider;
use vigil_core::types::{DecisionSource, Prediction, Verdict};

use crate::rules::CompiledRules;
use crate::scores;

/// The classifier pipeline. Stateless per call: rule tables and config are
/// read-only, so a shared reference can serve concurrent classifications as
/// long as the provider is itself concurrency-safe.
pub struct ClassifierPipeline {
    rules: CompiledRules,
    config: PipelineConfig,
    provider: Box<dyn ScoreProvider>,
}

impl ClassifierPipeline {
    /// Build with the shipped rule tables and default config.
    pub fn new(provider: Box<dyn ScoreProvider>) -> Result<Self, RuleSetError> {
        Self::with_config(provider, PipelineConfig::default())
    }

    /// Build with the shipped rule tables and a custom config.
    pub fn with_config(
        provider: Box<dyn ScoreProvider>,
        config: PipelineConfig,
    ) -> Result<Self, RuleSetError> {
        Ok(Self::with_parts(provider, config, CompiledRules::compile()?))
    }

    /// Build from already-compiled rules, for callers that tune the tables.
    pub fn with_parts(
        provider: Box<dyn ScoreProvider>,
        config: PipelineConfig,
        rules: CompiledRules,
    ) -> Self {
        Self {
            rules,
            config,
            provider,
        }
    }

    pub fn rules(&self) -> &CompiledRules {
        &self.rules
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Classify one snippet. Always produces exactly one verdict, or a
    /// [`ClassifyError`] when the provider cannot score the snippet — never
    /// a guessed default.
    pub fn classify(&self, code: &str) -> Result<Verdict, ClassifyError> {
        if self.rules.safe_override_matches(code) {
            tracing::debug!(source = DecisionSource::SafeApiOverride.as_str(), "short-circuit");
            return Ok(Verdict {
                prediction: Prediction::Clean,
                clean_probability: 1.0,
                defect_probability: 0.0,
                decision_source: DecisionSource::SafeApiOverride,
            });
        }

        if self.rules.structural_clean_matches(code) {
            tracing::debug!(
                source = DecisionSource::StructuralCleanOverride.as_str(),
                "short-circuit"
            );
            return Ok(Verdict {
                prediction: Prediction::Clean,
                clean_probability: self.config.effective_structural_clean_probability(),
                defect_probability: self.config.effective_structural_defect_probability(),
                decision_source: DecisionSource::StructuralCleanOverride,
            });
        }

        if self.rules.manual_defect_matches(code) {
            tracing::debug!(source = DecisionSource::ManualChecker.as_str(), "short-circuit");
            return Ok(Verdict {
                prediction: Prediction::Defective,
                clean_probability: 0.0,
                defect_probability: 1.0,
                decision_source: DecisionSource::ManualChecker,
            });
        }

        let static_flag = self.rules.static_danger_matches(code);

        let raw = match self.provider.score(code) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "score provider failed");
                return Err(err);
            }
        };
        let (clean_probability, defect_probability) = scores::canonicalize(raw)?;

        // Rule-based evidence of a dangerous API wins over a merely
        // low-confidence-clean model score.
        let (prediction, decision_source) = if static_flag {
            (Prediction::Defective, DecisionSource::StaticRule)
        } else if defect_probability >= self.config.effective_defect_threshold() {
            (Prediction::Defective, DecisionSource::MlHighConfidence)
        } else {
            (Prediction::Clean, DecisionSource::MlLowConfidence)
        };

        tracing::debug!(
            source = decision_source.as_str(),
            defect_probability,
            static_flag,
            "model-path verdict"
        );

        Ok(Verdict {
            prediction,
            clean_probability,
            defect_probability,
            decision_source,
        })
    }

    /// Classify a batch — a convenience loop over [`classify`](Self::classify).
    /// The first failure aborts the batch.
    pub fn classify_batch(&self, codes: &[&str]) -> Result<Vec<Verdict>, ClassifyError> {
        codes.iter().map(|code| self.classify(code)).collect()
    }
}
