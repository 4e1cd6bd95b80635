//! Temporal proximity (weight 0.3).
//! Cases detected closer together are more likely linked.

use outbreak_core::models::InferenceThresholds;

use super::super::PairEvidence;
use super::linear_proximity;

pub const WEIGHT: f64 = 0.3;

pub fn score(evidence: &PairEvidence, thresholds: &InferenceThresholds) -> Option<f64> {
    Some(linear_proximity(
        evidence.days_apart as f64,
        thresholds.temporal_window_days as f64,
    ))
}
