//! # vigil-analysis
//!
//! The Vigil classification pipeline: compiled rule stages, score
//! canonicalization, and the arbitration function that turns a code snippet
//! into exactly one clean/defective verdict.

pub mod pipeline;
pub mod rules;
pub mod scores;

pub use pipeline::ClassifierPipeline;
pub use rules::{CompiledRules, RulePattern, RuleStage, RuleTables};
