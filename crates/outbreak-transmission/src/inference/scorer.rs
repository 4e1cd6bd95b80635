//! Composite likelihood scoring.

use outbreak_core::models::InferenceThresholds;

use super::strategies;
use super::PairEvidence;

/// Weighted mean of the applicable strategy scores, clamped to [0, 1].
///
/// With all three strategies this is `0.3 t + 0.3 s + 0.4 g`; without genetic
/// evidence it reduces to `0.5 t + 0.5 s`. Non-finite evidence scores 0.
pub fn compute_likelihood(evidence: &PairEvidence, thresholds: &InferenceThresholds) -> f64 {
    let mut weighted_sum = 0.0;
    let mut applied_weight = 0.0;

    for s in &strategies::all_strategies() {
        if let Some(raw) = (s.score_fn)(evidence, thresholds) {
            weighted_sum += raw * s.weight;
            applied_weight += s.weight;
        }
    }

    let likelihood = if applied_weight > 0.0 {
        weighted_sum / applied_weight
    } else {
        0.0
    };
    // `clamp` passes NaN through.
    if likelihood.is_finite() {
        likelihood.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
