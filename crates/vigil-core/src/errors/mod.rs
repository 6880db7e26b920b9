//! Error taxonomy for the Vigil classifier.
//!
//! Three concerns, one enum each: rule-set compilation (fatal at
//! construction), classification (scoring failures propagate to the caller),
//! and config loading.

pub mod classify_error;
pub mod config_error;
pub mod error_code;
pub mod rule_set_error;

pub use classify_error::ClassifyError;
pub use config_error::ConfigError;
pub use rule_set_error::RuleSetError;
