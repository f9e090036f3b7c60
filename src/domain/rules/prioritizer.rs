//! Total ordering over generated candidates.

use crate::domain::recommendation::StudyRecommendation;

/// Sorts candidates descending on (priority rank, impact rank, confidence).
///
/// The sort is stable, so exact ties keep their input order; callers relying
/// on determinism only need to feed candidates in a deterministic order.
pub fn prioritize(mut candidates: Vec<StudyRecommendation>) -> Vec<StudyRecommendation> {
    candidates.sort_by(|a, b| {
        b.priority
            .rank()
            .cmp(&a.priority.rank())
            .then_with(|| b.estimated_impact.rank().cmp(&a.estimated_impact.rank()))
            .then_with(|| b.metadata.confidence.total_cmp(&a.metadata.confidence))
    });
    candidates
}
