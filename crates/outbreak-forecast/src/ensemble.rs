//! Region-by-region combination of per-model forecasts.
//!
//! Risk and expected counts are weighted averages over the models that
//! reported the region. Intervals take the lowest lower bound and the highest
//! upper bound of the contributing models. That envelope is a conservative
//! approximation, not a combined predictive interval.

use std::collections::BTreeMap;

use outbreak_core::models::{ConfidenceInterval, ForecastResult, Region};

/// Combine `predictions` (model id, result) using `weights` normalised over
/// the same ids.
pub fn combine(
    predictions: Vec<(String, ForecastResult)>,
    weights: BTreeMap<String, f64>,
    regions: &[Region],
) -> ForecastResult {
    let mut combined = ForecastResult::new();

    for region in regions {
        let id = region.id.as_str();
        let risk = weighted_mean(predictions.iter().filter_map(|(model, p)| {
            p.risk_by_region
                .get(id)
                .map(|&v| (weight(&weights, model), v))
        }));
        let cases = weighted_mean(predictions.iter().filter_map(|(model, p)| {
            p.predicted_case_count
                .get(id)
                .map(|&v| (weight(&weights, model), v))
        }));
        let interval = predictions
            .iter()
            .filter_map(|(_, p)| p.confidence_intervals.get(id))
            .fold(None, |acc: Option<(f64, f64)>, ci| {
                Some(match acc {
                    Some((lo, hi)) => (lo.min(ci.lower), hi.max(ci.upper)),
                    None => (ci.lower, ci.upper),
                })
            });

        if let Some(risk) = risk {
            combined.risk_by_region.insert(id.to_string(), risk.clamp(0.0, 1.0));
        }
        if let Some(cases) = cases {
            combined
                .predicted_case_count
                .insert(id.to_string(), cases.max(0.0));
        }
        if let Some((lower, upper)) = interval {
            combined
                .confidence_intervals
                .insert(id.to_string(), ConfidenceInterval::new(lower, upper));
        }
    }

    combined.model_weights = Some(weights);
    combined.model_predictions = Some(predictions.into_iter().collect());
    combined
}

fn weight(weights: &BTreeMap<String, f64>, model: &str) -> f64 {
    weights.get(model).copied().unwrap_or(0.0)
}

/// Weighted mean of `(weight, value)` pairs; a plain mean when every weight is 0.
fn weighted_mean(pairs: impl Iterator<Item = (f64, f64)>) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = pairs.collect();
    if pairs.is_empty() {
        return None;
    }
    let total: f64 = pairs.iter().map(|(w, _)| w).sum();
    if total > 0.0 {
        Some(pairs.iter().map(|(w, v)| w * v).sum::<f64>() / total)
    } else {
        Some(pairs.iter().map(|(_, v)| v).sum::<f64>() / pairs.len() as f64)
    }
}
