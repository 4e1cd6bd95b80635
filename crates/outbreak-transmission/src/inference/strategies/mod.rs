//! Evidence strategies and their weights.
//!
//! A strategy returns `None` when its evidence is unavailable for a pair; the
//! composite is then renormalised over the strategies that did apply.

pub mod genetic_similarity;
pub mod spatial_proximity;
pub mod temporal_proximity;

use outbreak_core::models::InferenceThresholds;

use super::PairEvidence;

/// A named strategy with its weight.
pub struct StrategyEntry {
    pub name: &'static str,
    pub weight: f64,
    pub score_fn: fn(&PairEvidence, &InferenceThresholds) -> Option<f64>,
}

/// All registered strategies with their weights.
pub fn all_strategies() -> Vec<StrategyEntry> {
    vec![
        StrategyEntry {
            name: "temporal_proximity",
            weight: temporal_proximity::WEIGHT,
            score_fn: temporal_proximity::score,
        },
        StrategyEntry {
            name: "spatial_proximity",
            weight: spatial_proximity::WEIGHT,
            score_fn: spatial_proximity::score,
        },
        StrategyEntry {
            name: "genetic_similarity",
            weight: genetic_similarity::WEIGHT,
            score_fn: genetic_similarity::score,
        },
    ]
}

/// `1 - value / limit` clamped to [0, 1]. A zero limit only admits zero values.
pub(crate) fn linear_proximity(value: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        (1.0 - value / limit).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_are_ordered_and_weights_sum_to_one() {
        let strategies = all_strategies();
        let names: Vec<&str> = strategies.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["temporal_proximity", "spatial_proximity", "genetic_similarity"]
        );
        let total: f64 = strategies.iter().map(|s| s.weight).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn linear_proximity_scales_against_limit() {
        assert_eq!(linear_proximity(0.0, 0.0), 1.0);
        assert_eq!(linear_proximity(5.0, 10.0), 0.5);
        assert_eq!(linear_proximity(20.0, 10.0), 0.0);
    }
}
