//! Ensemble weights as an immutable value.
//!
//! Raw weights are stored per model id; consumers read normalised views.
//! Every change produces a new table, so a forecast running against one
//! table is never affected by an evaluation replacing it.

use std::collections::BTreeMap;

use outbreak_core::config::defaults::DEFAULT_MODEL_WEIGHT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    raw: BTreeMap<String, f64>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy with `id` set to `weight`. Negative or non-finite weights become 0.
    pub fn with_model(&self, id: impl Into<String>, weight: f64) -> Self {
        let mut raw = self.raw.clone();
        raw.insert(id.into(), sanitize(weight));
        Self { raw }
    }

    pub fn without_model(&self, id: &str) -> Self {
        let mut raw = self.raw.clone();
        raw.remove(id);
        Self { raw }
    }

    pub fn raw(&self, id: &str) -> Option<f64> {
        self.raw.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Weights over every model, summing to 1. Equal when all raw weights are 0.
    pub fn normalized(&self) -> BTreeMap<String, f64> {
        normalize(self.raw.iter().map(|(id, &w)| (id.as_str(), w)))
    }

    /// Weights over `ids` only, summing to 1. Unknown ids count with the default weight.
    pub fn normalized_subset<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> BTreeMap<String, f64> {
        normalize(
            ids.into_iter()
                .map(|id| (id, self.raw(id).unwrap_or(DEFAULT_MODEL_WEIGHT))),
        )
    }

    /// A table reweighted from backtest RMSE: `max_rmse / rmse`.
    ///
    /// A zero RMSE gets `max_rmse`; when every RMSE is zero all scored models
    /// get equal weight. Models without an RMSE keep their raw weight.
    pub fn reweighted(&self, rmse: &BTreeMap<String, f64>) -> Self {
        let scored: Vec<(&String, f64)> = rmse
            .iter()
            .filter(|(_, r)| r.is_finite() && **r >= 0.0)
            .map(|(id, &r)| (id, r))
            .collect();
        if scored.is_empty() {
            return self.clone();
        }
        let max_rmse = scored.iter().map(|(_, r)| *r).fold(0.0, f64::max);

        let mut raw = self.raw.clone();
        for (id, r) in scored {
            let weight = if max_rmse <= 0.0 {
                DEFAULT_MODEL_WEIGHT
            } else if r > 0.0 {
                max_rmse / r
            } else {
                max_rmse
            };
            raw.insert(id.clone(), weight);
        }
        Self { raw }
    }
}

fn sanitize(weight: f64) -> f64 {
    if weight.is_finite() {
        weight.max(0.0)
    } else {
        0.0
    }
}

fn normalize<'a>(weights: impl Iterator<Item = (&'a str, f64)>) -> BTreeMap<String, f64> {
    let weights: Vec<(&str, f64)> = weights.collect();
    if weights.is_empty() {
        return BTreeMap::new();
    }
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    if total > 0.0 {
        weights
            .into_iter()
            .map(|(id, w)| (id.to_string(), w / total))
            .collect()
    } else {
        let equal = 1.0 / weights.len() as f64;
        weights
            .into_iter()
            .map(|(id, _)| (id.to_string(), equal))
            .collect()
    }
}
