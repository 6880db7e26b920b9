//! Stable error codes for machine consumers of classification failures.

/// Trait for errors that expose a stable string code.
pub trait VigilErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const SCORING_FAILED: &str = "SCORING_FAILED";
pub const MALFORMED_SCORE: &str = "MALFORMED_SCORE";
pub const INVALID_RULE_PATTERN: &str = "INVALID_RULE_PATTERN";
pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
