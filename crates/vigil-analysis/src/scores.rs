//! Canonicalization of raw provider scores.
//!
//! A provider's native output order is unspecified, so the pair is sorted by
//! label identifier before index 0 is read as "clean" and index 1 as
//! "defective". The sort is mandatory — skipping it would silently swap the
//! probabilities for providers that emit the defective label first.

use vigil_core::errors::ClassifyError;
use vigil_core::types::ScorePair;

/// Reduce a raw score pair to `(clean_probability, defect_probability)`.
pub fn canonicalize(mut raw: ScorePair) -> Result<(f64, f64), ClassifyError> {
    if raw.len() != 2 {
        return Err(ClassifyError::MalformedScore {
            detail: format!("expected 2 label scores, got {}", raw.len()),
        });
    }
    for entry in &raw {
        if !entry.probability.is_finite() || !(0.0..=1.0).contains(&entry.probability) {
            return Err(ClassifyError::MalformedScore {
                detail: format!(
                    "probability {} for label {} out of [0, 1]",
                    entry.probability, entry.label
                ),
            });
        }
    }
    raw.sort_by(|a, b| a.label.cmp(&b.label));
    Ok((raw[0].probability, raw[1].probability))
}
