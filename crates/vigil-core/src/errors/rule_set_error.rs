//! Rule-set construction errors.

use super::error_code::{self, VigilErrorCode};

/// Errors compiling the static rule tables.
///
/// Fatal: the pipeline refuses to serve classifications with a partially
/// loaded rule set, so construction fails as a whole.
#[derive(Debug, thiserror::Error)]
pub enum RuleSetError {
    #[error("Invalid pattern in stage {stage}: {message}")]
    InvalidPattern { stage: &'static str, message: String },
}

impl VigilErrorCode for RuleSetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => error_code::INVALID_RULE_PATTERN,
        }
    }
}
