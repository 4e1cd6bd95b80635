//! Distance-decay spread model.
//!
//! Fitting mines historical case pairs that look like transmission (a later
//! case within the distance threshold of a case from the preceding window)
//! to estimate a base rate and per-subtype multipliers. Prediction sums the
//! decayed contribution of every active case to each region centroid.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use outbreak_core::config::{defaults, DistanceModelConfig};
use outbreak_core::errors::{ForecastError, OutbreakResult};
use outbreak_core::models::{Case, ForecastResult, Region, VirusSubtype};
use outbreak_core::traits::{FitContext, IForecastModel, PredictContext};
use outbreak_geo::{haversine_km, poisson_interval, resolve_centroid};

pub const MODEL_NAME: &str = "distance_based";

/// Event distances are floored here so co-located pairs don't dominate the rate.
const MIN_EVENT_DISTANCE_KM: f64 = 1.0;

/// Environmental suitability `s` in [0, 1] maps to `0.5 + 1.5 s`.
const ENV_BASE: f64 = 0.5;
const ENV_SPAN: f64 = 1.5;

/// Learned parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceDecayParams {
    pub base_transmission_rate: f64,
    pub subtype_factors: BTreeMap<VirusSubtype, f64>,
    /// Transmission-like events found during fitting.
    pub event_count: usize,
}

impl DistanceDecayParams {
    pub fn subtype_factor(&self, subtype: VirusSubtype) -> f64 {
        self.subtype_factors
            .get(&subtype)
            .copied()
            .unwrap_or(defaults::DEFAULT_SUBTYPE_FACTOR)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DistanceDecayModel {
    config: DistanceModelConfig,
    params: Option<DistanceDecayParams>,
}

impl DistanceDecayModel {
    pub fn new(config: DistanceModelConfig) -> Self {
        Self {
            config,
            params: None,
        }
    }

    pub fn config(&self) -> &DistanceModelConfig {
        &self.config
    }

    pub fn params(&self) -> Option<&DistanceDecayParams> {
        self.params.as_ref()
    }

    /// Learn the base rate and subtype factors from `cases`.
    pub fn estimate(&self, cases: &[Case]) -> DistanceDecayParams {
        let mut by_day: BTreeMap<NaiveDate, Vec<&Case>> = BTreeMap::new();
        for case in cases {
            by_day.entry(case.detection_date).or_default().push(case);
        }
        let window = Days::new(self.config.time_window_days.max(0) as u64);

        let mut event_distances = Vec::new();
        let mut source_subtypes: BTreeMap<VirusSubtype, usize> = BTreeMap::new();

        for (&day, targets) in by_day.iter().skip(1) {
            let window_start = day - window;
            let sources: Vec<&Case> = by_day
                .range(window_start..day)
                .flat_map(|(_, cases)| cases.iter().copied())
                .collect();

            for target in targets {
                for source in &sources {
                    if source.id == target.id {
                        continue;
                    }
                    let distance = haversine_km(source.location(), target.location());
                    if distance <= self.config.transmission_threshold_km {
                        event_distances.push(distance);
                        *source_subtypes
                            .entry(source.subtype_or_unknown())
                            .or_default() += 1;
                    }
                }
            }
        }

        let event_count = event_distances.len();
        let decay_sum: f64 = event_distances
            .iter()
            .map(|d| d.max(MIN_EVENT_DISTANCE_KM).powf(-self.config.distance_decay))
            .sum();
        let base_transmission_rate = if event_count > 0 && decay_sum > 0.0 {
            event_count as f64 / decay_sum
        } else {
            defaults::DEFAULT_BASE_TRANSMISSION_RATE
        };

        let mut subtype_factors: BTreeMap<VirusSubtype, f64> = VirusSubtype::ALL
            .iter()
            .map(|&s| (s, defaults::DEFAULT_SUBTYPE_FACTOR))
            .collect();
        if event_count > 0 {
            for (subtype, count) in source_subtypes {
                subtype_factors.insert(subtype, count as f64 / event_count as f64);
            }
        }

        DistanceDecayParams {
            base_transmission_rate,
            subtype_factors,
            event_count,
        }
    }

    /// Daily transmission probability from one case at `distance_km`.
    fn contribution(&self, params: &DistanceDecayParams, case: &Case, distance_km: f64) -> f64 {
        let decayed = if distance_km > 0.0 {
            params.base_transmission_rate * distance_km.powf(-self.config.distance_decay)
        } else {
            params.base_transmission_rate
        };
        decayed * params.subtype_factor(case.subtype_or_unknown())
    }
}

impl IForecastModel for DistanceDecayModel {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    fn fit(
        &mut self,
        cases: &[Case],
        _regions: &[Region],
        _ctx: &FitContext,
    ) -> OutbreakResult<()> {
        self.params = Some(self.estimate(cases));
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
            model_id: MODEL_NAME.to_string(),
        })?;

        let mut result = ForecastResult::new();
        let Some(as_of) = ctx.reference_date(cases) else {
            // No cases and no reference date: nothing is active anywhere.
            for region in regions.iter().filter(|r| resolve_centroid(r).is_some()) {
                result.insert(region.id.clone(), 0.0, 0.0, poisson_interval(0.0));
            }
            return Ok(result);
        };

        let active: Vec<&Case> = cases
            .iter()
            .filter(|c| {
                let age = (as_of - c.detection_date).num_days();
                (0..=self.config.time_window_days).contains(&age)
            })
            .collect();
        let days = f64::from(days_ahead);

        for region in regions {
            let Some(centroid) = resolve_centroid(region) else {
                continue;
            };
            let environment = ctx
                .environmental_factors
                .get(&region.id)
                .map(|s| ENV_BASE + ENV_SPAN * s.clamp(0.0, 1.0));

            let daily_risk: f64 = active
                .iter()
                .filter_map(|case| {
                    let distance = haversine_km(case.location(), centroid);
                    (distance <= self.config.transmission_threshold_km)
                        .then(|| self.contribution(params, case, distance))
                })
                .map(|p| p * environment.unwrap_or(1.0))
                .sum::<f64>()
                .clamp(0.0, 1.0);

            let risk = 1.0 - (1.0 - daily_risk).powf(days);
            let expected = risk * region.density_or(self.config.default_density_factor) * days;
            result.insert(region.id.clone(), risk, expected, poisson_interval(expected));
        }
        Ok(result)
    }

    fn fresh(&self) -> Box<dyn IForecastModel> {
        Box::new(Self::new(self.config))
    }
}
