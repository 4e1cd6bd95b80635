//! Network-propagation spread model.
//!
//! Spread follows an external region-to-region connectivity table (migration
//! routes, trade links, transport). Fitting counts how often a region saw
//! cases in the week after a connected region did; prediction pushes risk
//! from currently active regions along weighted edges.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Days, NaiveDate};
use outbreak_core::config::{defaults, NetworkModelConfig, NetworkType};
use outbreak_core::errors::{ForecastError, OutbreakResult};
use outbreak_core::models::{Case, ConnectivityTable, ForecastResult, Region, TransmissionPath};
use outbreak_core::traits::{FitContext, IForecastModel, PredictContext};
use outbreak_geo::poisson_interval;

pub const MODEL_NAME: &str = "network";

/// Expected new cases per existing case in an already-active region.
const ACTIVE_REGION_CASE_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
struct NetworkParams {
    connectivity: ConnectivityTable,
    /// Learned per-edge probability, keyed `(source, target)`.
    edge_probabilities: BTreeMap<(String, String), f64>,
}

#[derive(Debug, Clone)]
pub struct NetworkPropagationModel {
    config: NetworkModelConfig,
    /// Table supplied at construction; a table in the fit context wins.
    connectivity: Option<ConnectivityTable>,
    params: Option<NetworkParams>,
    id: String,
}

impl NetworkPropagationModel {
    pub fn new(config: NetworkModelConfig) -> Self {
        let id = format!("{MODEL_NAME}_{}", config.network_type);
        Self {
            config,
            connectivity: None,
            params: None,
            id,
        }
    }

    pub fn with_connectivity(mut self, connectivity: ConnectivityTable) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    pub fn network_type(&self) -> NetworkType {
        self.config.network_type
    }

    /// Learned probability for `source -> target`, if the edge was observed.
    pub fn edge_probability(&self, source: &str, target: &str) -> Option<f64> {
        self.params.as_ref().and_then(|p| {
            p.edge_probabilities
                .get(&(source.to_string(), target.to_string()))
                .copied()
        })
    }

    fn learn(connectivity: &ConnectivityTable, cases: &[Case]) -> BTreeMap<(String, String), f64> {
        let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
        let (Some(first), Some(last)) = (
            cases.iter().map(|c| c.detection_date).min(),
            cases.iter().map(|c| c.detection_date).max(),
        ) else {
            return BTreeMap::new();
        };

        let windows = weekly_windows(first, last);
        for pair in windows.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            let current_regions: BTreeSet<&str> = cases
                .iter()
                .filter(|c| in_window(c.detection_date, current))
                .filter_map(|c| c.region_id.as_deref())
                .collect();

            for target in cases
                .iter()
                .filter(|c| in_window(c.detection_date, next))
                .filter_map(|c| c.region_id.as_deref())
            {
                for &source in &current_regions {
                    if connectivity.weight(source, target) > 0.0 {
                        *counts
                            .entry((source.to_string(), target.to_string()))
                            .or_default() += 1;
                    }
                }
            }
        }

        let total: usize = counts.values().sum();
        counts
            .into_iter()
            .map(|(edge, count)| (edge, count as f64 / total as f64))
            .collect()
    }

    /// Multiplier for the `source -> target` edge under this network type.
    fn edge_multiplier(&self, source: &str, target: &str, ctx: &PredictContext) -> f64 {
        match self.config.network_type {
            NetworkType::Migration => ctx.seasonal_factor.unwrap_or(1.0),
            NetworkType::Trade => ctx
                .trade_volume
                .as_ref()
                .map_or(1.0, |tv| tv.multiplier(source, target)),
            NetworkType::Transport => 1.0,
        }
    }
}

impl Default for NetworkPropagationModel {
    fn default() -> Self {
        Self::new(NetworkModelConfig::default())
    }
}

/// Half-open 7-day windows `[start, start + 7)` anchored at `first`,
/// continuing while the start is on or before `last`.
fn weekly_windows(first: NaiveDate, last: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let step = Days::new(defaults::DEFAULT_WEEKLY_WINDOW_DAYS as u64);
    let mut windows = Vec::new();
    let mut start = first;
    while start <= last {
        let end = start + step;
        windows.push((start, end));
        start = end;
    }
    windows
}

fn in_window(date: NaiveDate, (start, end): (NaiveDate, NaiveDate)) -> bool {
    date >= start && date < end
}

impl IForecastModel for NetworkPropagationModel {
    fn name(&self) -> &str {
        &self.id
    }

    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    fn fit(&mut self, cases: &[Case], _regions: &[Region], ctx: &FitContext) -> OutbreakResult<()> {
        let connectivity = ctx
            .connectivity
            .clone()
            .or_else(|| self.connectivity.clone())
            .ok_or_else(|| ForecastError::MissingConnectivity {
                model_id: self.id.clone(),
            })?;
        let edge_probabilities = Self::learn(&connectivity, cases);
        self.params = Some(NetworkParams {
            connectivity,
            edge_probabilities,
        });
        Ok(())
    }

    fn predict(
        &self,
        cases: &[Case],
        regions: &[Region],
        days_ahead: u32,
        ctx: &PredictContext,
    ) -> OutbreakResult<ForecastResult> {
        let params = self.params.as_ref().ok_or_else(|| ForecastError::NotFitted {
            model_id: self.id.clone(),
        })?;

        let mut existing: BTreeMap<&str, usize> = BTreeMap::new();
        for region_id in cases.iter().filter_map(|c| c.region_id.as_deref()) {
            *existing.entry(region_id).or_default() += 1;
        }

        let days = f64::from(days_ahead);
        let mut result = ForecastResult::new();

        for region in regions {
            let target = region.id.as_str();
            if let Some(&count) = existing.get(target) {
                let expected = count as f64 * ACTIVE_REGION_CASE_FACTOR;
                result.insert(target, 1.0, expected, poisson_interval(expected));
                continue;
            }

            let mut daily_risk = 0.0;
            for &source in existing.keys() {
                let Some(weight) = params.connectivity.get(source, target) else {
                    continue;
                };
                let probability = params
                    .edge_probabilities
                    .get(&(source.to_string(), target.to_string()))
                    .copied()
                    .unwrap_or(self.config.unobserved_edge_probability);
                let path_risk = weight * probability * self.edge_multiplier(source, target, ctx);
                daily_risk += path_risk;

                if path_risk > self.config.notable_path_threshold {
                    result.transmission_paths.push(TransmissionPath {
                        source: source.to_string(),
                        target: target.to_string(),
                        risk: path_risk,
                    });
                }
            }

            let daily_risk = daily_risk.clamp(0.0, 1.0);
            let risk = (1.0 - (1.0 - daily_risk).powf(days)).min(1.0);
            let susceptible = f64::from(region.farm_count_or(self.config.default_farm_count))
                * self.config.susceptible_fraction;
            let expected = risk * susceptible * self.config.attack_rate;
            result.insert(target, risk, expected, poisson_interval(expected));
        }
        Ok(result)
    }

    fn fresh(&self) -> Box<dyn IForecastModel> {
        Box::new(Self {
            config: self.config,
            connectivity: self.connectivity.clone(),
            params: None,
            id: self.id.clone(),
        })
    }
}
