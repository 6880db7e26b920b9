//! Classification-time errors.

use super::error_code::{self, VigilErrorCode};

/// Errors that can occur while classifying a snippet.
///
/// A scoring failure is never mapped to a default verdict — the
/// `decision_source` audit field must stay truthful, so the request fails
/// explicitly instead.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("Score provider failed: {message}")]
    Scoring { message: String },

    #[error("Malformed provider score: {detail}")]
    MalformedScore { detail: String },
}

impl VigilErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scoring { .. } => error_code::SCORING_FAILED,
            Self::MalformedScore { .. } => error_code::MALFORMED_SCORE,
        }
    }
}
