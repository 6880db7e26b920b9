//! In-memory `ScoreProvider` doubles for tests and benches.

use smallvec::smallvec;

use crate::errors::ClassifyError;
use crate::types::{LabelScore, ScorePair};

use super::score_provider::ScoreProvider;

/// A provider that returns the same score pair for every snippet.
///
/// Labels are emitted as `clean`/`defective`; [`reversed`](Self::reversed)
/// flips the emission order to exercise label canonicalization downstream.
#[derive(Debug, Clone)]
pub struct FixedScoreProvider {
    clean: f64,
    defect: f64,
    reversed: bool,
}

impl FixedScoreProvider {
    pub fn new(clean: f64, defect: f64) -> Self {
        Self {
            clean,
            defect,
            reversed: false,
        }
    }

    /// Emit the defective entry first.
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }
}

impl ScoreProvider for FixedScoreProvider {
    fn score(&self, _code: &str) -> Result<ScorePair, ClassifyError> {
        let clean = LabelScore::new("clean", self.clean);
        let defect = LabelScore::new("defective", self.defect);
        Ok(if self.reversed {
            smallvec![defect, clean]
        } else {
            smallvec![clean, defect]
        })
    }
}

/// A provider that always fails, for exercising error propagation.
#[derive(Debug, Clone)]
pub struct FailingScoreProvider {
    message: String,
}

impl FailingScoreProvider {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ScoreProvider for FailingScoreProvider {
    fn score(&self, _code: &str) -> Result<ScorePair, ClassifyError> {
        Err(ClassifyError::Scoring {
            message: self.message.clone(),
        })
    }
}
