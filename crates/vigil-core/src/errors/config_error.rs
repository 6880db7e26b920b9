//! Config loading errors.

use super::error_code::{self, VigilErrorCode};

/// Errors loading a pipeline config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl VigilErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => error_code::CONFIG_IO,
            Self::Parse(_) => error_code::CONFIG_PARSE,
        }
    }
}
