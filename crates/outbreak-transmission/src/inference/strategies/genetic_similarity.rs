//! Genetic similarity (weight 0.4). Only applies when both cases were sequenced.

use outbreak_core::models::InferenceThresholds;

use super::super::PairEvidence;
use super::linear_proximity;

pub const WEIGHT: f64 = 0.4;

pub fn score(evidence: &PairEvidence, thresholds: &InferenceThresholds) -> Option<f64> {
    evidence
        .genetic_distance
        .map(|d| linear_proximity(d, thresholds.genetic_threshold))
}
