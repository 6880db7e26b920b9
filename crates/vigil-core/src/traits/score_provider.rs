//! `ScoreProvider` — the opaque statistical classifier seam.

use crate::errors::ClassifyError;
use crate::types::ScorePair;

/// Anything that turns a code snippet into clean/defective probabilities.
///
/// Implementations return exactly two (label, probability) entries covering
/// the "clean" and "defective" labels, probabilities in [0, 1]. The native
/// output order is unspecified — the pipeline canonicalizes by label before
/// reading it, so implementations need not sort.
///
/// `Send + Sync` because the pipeline is invoked concurrently; a backend
/// wrapping non-reentrant model state must synchronize internally. The call
/// may block on model inference — latency-sensitive callers run
/// classification off their event loop and impose their own timeout.
pub trait ScoreProvider: Send + Sync {
    /// Score one snippet.
    fn score(&self, code: &str) -> Result<ScorePair, ClassifyError>;

    /// Score a batch of snippets.
    ///
    /// Default implementation loops over [`score`](Self::score); a model
    /// backend may override it with a vectored call. The first failure
    /// aborts the batch.
    fn score_batch(&self, codes: &[&str]) -> Result<Vec<ScorePair>, ClassifyError> {
        codes.iter().map(|code| self.score(code)).collect()
    }
}
