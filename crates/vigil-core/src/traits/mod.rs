//! Trait seams between the pipeline and its collaborators.

pub mod score_provider;
pub mod test_helpers;

pub use score_provider::ScoreProvider;
