//! Spatial proximity (weight 0.3).

use outbreak_core::models::InferenceThresholds;

use super::super::PairEvidence;
use super::linear_proximity;

pub const WEIGHT: f64 = 0.3;

pub fn score(evidence: &PairEvidence, thresholds: &InferenceThresholds) -> Option<f64> {
    Some(linear_proximity(
        evidence.distance_km,
        thresholds.spatial_threshold_km,
    ))
}
