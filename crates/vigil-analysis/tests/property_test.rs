//! Property tests: the pipeline never returns "no opinion", rule verdicts
//! carry their fixed confidence constants, and the model path passes the
//! canonicalized probabilities through untouched.

use proptest::prelude::*;

use vigil_analysis::ClassifierPipeline;
use vigil_core::traits::test_helpers::FixedScoreProvider;
use vigil_core::types::{DecisionSource, Prediction};

proptest! {
    #[test]
    fn prop_exactly_one_verdict_with_consistent_audit_trail(
        code in "[ -~\\n]{0,120}",
        clean in 0.0f64..=1.0,
        reversed in any::<bool>(),
    ) {
        let defect = 1.0 - clean;
        let provider = if reversed {
            FixedScoreProvider::new(clean, defect).reversed()
        } else {
            FixedScoreProvider::new(clean, defect)
        };
        let pipeline = ClassifierPipeline::new(Box::new(provider)).unwrap();

        let verdict = pipeline.classify(&code).unwrap();

        match verdict.decision_source {
            DecisionSource::SafeApiOverride => {
                prop_assert_eq!(verdict.prediction, Prediction::Clean);
                prop_assert_eq!(verdict.clean_probability, 1.0);
                prop_assert_eq!(verdict.defect_probability, 0.0);
            }
            DecisionSource::StructuralCleanOverride => {
                prop_assert_eq!(verdict.prediction, Prediction::Clean);
                prop_assert_eq!(verdict.clean_probability, 0.9);
                prop_assert_eq!(verdict.defect_probability, 0.1);
            }
            DecisionSource::ManualChecker => {
                prop_assert_eq!(verdict.prediction, Prediction::Defective);
                prop_assert_eq!(verdict.clean_probability, 0.0);
                prop_assert_eq!(verdict.defect_probability, 1.0);
            }
            DecisionSource::StaticRule => {
                prop_assert_eq!(verdict.prediction, Prediction::Defective);
                prop_assert_eq!(verdict.clean_probability, clean);
                prop_assert_eq!(verdict.defect_probability, defect);
            }
            DecisionSource::MlHighConfidence => {
                prop_assert_eq!(verdict.prediction, Prediction::Defective);
                prop_assert!(verdict.defect_probability >= 0.60);
                prop_assert_eq!(verdict.clean_probability, clean);
            }
            DecisionSource::MlLowConfidence => {
                prop_assert_eq!(verdict.prediction, Prediction::Clean);
                prop_assert!(verdict.defect_probability < 0.60);
                prop_assert_eq!(verdict.clean_probability, clean);
            }
        }
    }

    #[test]
    fn prop_classification_is_deterministic(
        code in "[ -~\\n]{0,120}",
        clean in 0.0f64..=1.0,
    ) {
        let pipeline = ClassifierPipeline::new(Box::new(FixedScoreProvider::new(
            clean,
            1.0 - clean,
        )))
        .unwrap();
        let first = pipeline.classify(&code).unwrap();
        let second = pipeline.classify(&code).unwrap();
        prop_assert_eq!(first, second);
    }
}
