//! Pairwise link inference: evidence gathering, threshold filters, scoring.

pub mod scorer;
pub mod strategies;

use outbreak_core::models::{Case, InferenceThresholds, TransmissionLink};
use outbreak_geo::{case_distance_km, genetic_distance};
use rayon::prelude::*;

/// Evidence gathered for an ordered case pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairEvidence {
    pub days_apart: i64,
    pub distance_km: f64,
    /// Present only when both cases carry sequences.
    pub genetic_distance: Option<f64>,
}

impl PairEvidence {
    pub fn between(source: &Case, target: &Case) -> Self {
        let genetic = match (source.sequence(), target.sequence()) {
            (Some(a), Some(b)) => Some(genetic_distance(a, b)),
            _ => None,
        };
        Self {
            days_apart: (target.detection_date - source.detection_date).num_days(),
            distance_km: case_distance_km(source, target),
            genetic_distance: genetic,
        }
    }

    /// Whether the pair survives every filter.
    ///
    /// Each filter admits only values it can compare, so a NaN distance fails.
    pub fn passes(&self, thresholds: &InferenceThresholds) -> bool {
        if !(self.days_apart > 0 && self.days_apart <= thresholds.temporal_window_days) {
            return false;
        }
        if !(self.distance_km <= thresholds.spatial_threshold_km) {
            return false;
        }
        match self.genetic_distance {
            Some(d) => d <= thresholds.genetic_threshold,
            None => true,
        }
    }
}

/// Evaluates ordered case pairs against fixed thresholds.
pub struct LinkInference {
    thresholds: InferenceThresholds,
}

impl LinkInference {
    pub fn new(thresholds: InferenceThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &InferenceThresholds {
        &self.thresholds
    }

    /// A link from `source` to `target`, if every filter passes.
    pub fn evaluate(&self, source: &Case, target: &Case) -> Option<TransmissionLink> {
        if source.id == target.id {
            return None;
        }
        // Cheap temporal filter before computing distances.
        let days_apart = (target.detection_date - source.detection_date).num_days();
        if !(days_apart > 0 && days_apart <= self.thresholds.temporal_window_days) {
            return None;
        }
        let evidence = PairEvidence::between(source, target);
        if !evidence.passes(&self.thresholds) {
            return None;
        }
        Some(TransmissionLink {
            source: source.id.clone(),
            target: target.id.clone(),
            likelihood: scorer::compute_likelihood(&evidence, &self.thresholds),
            days_apart: evidence.days_apart,
            distance_km: evidence.distance_km,
            genetic_distance: evidence.genetic_distance,
        })
    }

    /// All links among `sorted_cases`, which must be in detection order.
    ///
    /// Output is ordered by source then target position.
    pub fn infer_links(&self, sorted_cases: &[Case]) -> Vec<TransmissionLink> {
        sorted_cases
            .par_iter()
            .enumerate()
            .map(|(i, source)| {
                sorted_cases[i + 1..]
                    .iter()
                    .filter_map(|target| self.evaluate(source, target))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}
