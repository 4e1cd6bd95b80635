//! Gaussian-process spatiotemporal regression.
//!
//! Daily case counts are aggregated per location (region centroid, or the
//! case's own location when it has no region) and regressed on standardised
//! `(lat, lon, day)` with a product RBF kernel and a nugget on the diagonal.
//! Hyperparameters are fixed; the spatial length scale is converted from km
//! to degrees before standardisation.

pub mod cholesky;
pub mod kernel;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use outbreak_core::config::GaussianModelConfig;
use outbreak_core::constants::KM_PER_DEGREE;
use outbreak_core::errors::{ForecastError, OutbreakResult};
use outbreak_core::models::{Case, ForecastResult, GeoPoint, GridPrediction, Region};
use outbreak_core::traits::{FitContext, IForecastModel, PredictContext};
use outbreak_geo::{normal_interval, resolve_centroid};

use self::cholesky::Cholesky;
use self::kernel::{SpaceTimeKernel, Standardizer};

pub const MODEL_NAME: &str = "gaussian_process";

/// Smallest cosine used when converting km to degrees of longitude.
const MIN_COS_LATITUDE: f64 = 1e-6;

/// One aggregated training observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub location: GeoPoint,
    pub day: i64,
    pub count: f64,
}

#[derive(Debug, Clone)]
struct GpFit {
    lat: Standardizer,
    lon: Standardizer,
    time: Standardizer,
    target: Standardizer,
    kernel: SpaceTimeKernel,
    inputs: Vec<[f64; 3]>,
    factor: Cholesky,
    /// `K⁻¹ y` in standardised target units.
    weights: Vec<f64>,
    latest_day: i64,
}

impl GpFit {
    fn standardise(&self, location: GeoPoint, day: i64) -> [f64; 3] {
        [
            self.lat.apply(location.latitude),
            self.lon.apply(location.longitude),
            self.time.apply(day as f64),
        ]
    }

    /// Posterior mean and standard deviation in case-count units.
    fn query(&self, location: GeoPoint, day: i64) -> (f64, f64) {
        let x = self.standardise(location, day);
        let k: Vec<f64> = self.inputs.iter().map(|xi| self.kernel.eval(&x, xi)).collect();
        let mean: f64 = k.iter().zip(&self.weights).map(|(a, b)| a * b).sum();
        let v = self.factor.solve_lower(&k);
        let variance = (1.0 - v.iter().map(|x| x * x).sum::<f64>()).max(0.0);
        (self.target.invert(mean), variance.sqrt() * self.target.std)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GaussianProcessModel {
    config: GaussianModelConfig,
    fit: Option<GpFit>,
}

impl GaussianProcessModel {
    pub fn new(config: GaussianModelConfig) -> Self {
        Self { config, fit: None }
    }

    pub fn config(&self) -> &GaussianModelConfig {
        &self.config
    }

    /// Training observations: daily counts per location.
    ///
    /// Cases naming an unknown region, or a region without geometry, are skipped.
    pub fn observations(cases: &[Case], regions: &[Region]) -> Vec<Observation> {
        let Some(first) = cases.iter().map(|c| c.detection_date).min() else {
            return Vec::new();
        };
        let centroids: BTreeMap<&str, Option<GeoPoint>> = regions
            .iter()
            .map(|r| (r.id.as_str(), resolve_centroid(r)))
            .collect();

        // Keyed on coordinate bits so identical locations aggregate exactly.
        let mut counts: BTreeMap<(i64, u64, u64), Observation> = BTreeMap::new();
        for case in cases {
            let location = match case.region_id.as_deref() {
                Some(id) => match centroids.get(id) {
                    Some(Some(point)) => *point,
                    _ => continue,
                },
                None => case.location(),
            };
            let day = day_index(first, case.detection_date);
            counts
                .entry((day, location.latitude.to_bits(), location.longitude.to_bits()))
                .or_insert(Observation {
                    location,
                    day,
                    count: 0.0,
                })
                .count += 1.0;
        }
        counts.into_values().collect()
    }

    fn train(&self, observations: &[Observation]) -> Result<GpFit, String> {
        let lats: Vec<f64> = observations.iter().map(|o| o.location.latitude).collect();
        let lons: Vec<f64> = observations.iter().map(|o| o.location.longitude).collect();
        let days: Vec<f64> = observations.iter().map(|o| o.day as f64).collect();
        let counts: Vec<f64> = observations.iter().map(|o| o.count).collect();

        let lat = Standardizer::fit(&lats);
        let lon = Standardizer::fit(&lons);
        let time = Standardizer::fit(&days);
        let target = Standardizer::fit(&counts);

        let km = self.config.spatial_length_scale_km;
        let cos_lat = lat.mean.to_radians().cos().abs().max(MIN_COS_LATITUDE);
        let kernel = SpaceTimeKernel {
            length_scales: [
                km / KM_PER_DEGREE / lat.std,
                km / (KM_PER_DEGREE * cos_lat) / lon.std,
                self.config.temporal_length_scale_days / time.std,
            ],
        };
        if kernel.length_scales.iter().any(|l| !(l.is_finite() && *l > 0.0)) {
            return Err(format!("degenerate length scales {:?}", kernel.length_scales));
        }

        let inputs: Vec<[f64; 3]> = observations
            .iter()
            .map(|o| {
                [
                    lat.apply(o.location.latitude),
                    lon.apply(o.location.longitude),
                    time.apply(o.day as f64),
                ]
            })
            .collect();
        let n = inputs.len();
        let mut gram = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..=i {
                let k = kernel.eval(&inputs[i], &inputs[j]);
                gram[i * n + j] = k;
                gram[j * n + i] = k;
            }
            gram[i * n + i] += self.config.nugget;
        }
        let factor = Cholesky::decompose(&gram, n)
            .ok_or_else(|| "kernel matrix is not positive definite".to_string())?;
        let y: Vec<f64> = counts.iter().map(|&c| target.apply(c)).collect();
        let weights = factor.solve(&y);

        Ok(GpFit {
            lat,
            lon,
            time,
            target,
            kernel,
            inputs,
            factor,
            weights,
            latest_day: observations.iter().map(|o| o.day).max().unwrap_or(0),
        })
    }
}

fn day_index(first: NaiveDate, date: NaiveDate) -> i64 {
    (date - first).num_days()
}

impl IForecastModel for GaussianProcessModel {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_some()
    }

    fn fit(&mut self, cases: &[Case], regions: &[Region], _ctx: &FitContext) -> OutbreakResult<()> {
        let observations = Self::observations(cases, regions);
        if observations.is_empty() {
            return Err(ForecastError::InsufficientData {
                reason: format!(
                    "no locatable training cases among {} supplied",
                    cases.len()
                ),
            }
            .into());
        }
        let fit = self.train(&observations).map_err(|reason| ForecastError::ModelFit {
            model_id: MODEL_NAME.to_string(),
            reason,
        })?;
        self.fit = Some(fit);
        Ok(())
    }

    fn predict(
        &self,
        _cases: &[Case],
        regions: &[Region],
        days_ahead: u32,
        ctx: &PredictContext,
    ) -> OutbreakResult<ForecastResult> {
        let fit = self.fit.as_ref().ok_or_else(|| ForecastError::NotFitted {
            model_id: MODEL_NAME.to_string(),
        })?;

        let mut result = ForecastResult::new();
        let horizon = i64::from(days_ahead);
        let ceiling = self.config.daily_case_ceiling * f64::from(days_ahead);

        for region in regions {
            let Some(centroid) = resolve_centroid(region) else {
                continue;
            };
            if days_ahead == 0 {
                result.insert(region.id.clone(), 0.0, 0.0, normal_interval(0.0, 0.0, 0.0));
                continue;
            }
            let (total, std_sum) = (1..=horizon)
                .map(|offset| fit.query(centroid, fit.latest_day + offset))
                .fold((0.0, 0.0), |(total, stds), (mean, std)| {
                    (total + mean.max(0.0), stds + std)
                });
            let average_std = std_sum / horizon as f64;
            let risk = if ceiling > 0.0 { (total / ceiling).min(1.0) } else { 0.0 };
            let interval = normal_interval(total, average_std, f64::from(days_ahead).sqrt());
            result.insert(region.id.clone(), risk, total, interval);
        }

        if !ctx.prediction_grid.is_empty() {
            let day = fit.latest_day + horizon;
            result.prediction_grid = Some(
                ctx.prediction_grid
                    .iter()
                    .map(|&location| {
                        let (mean, std) = fit.query(location, day);
                        GridPrediction {
                            location,
                            predicted_cases: mean.max(0.0),
                            std_dev: std,
                        }
                    })
                    .collect(),
            );
        }
        Ok(result)
    }

    fn fresh(&self) -> Box<dyn IForecastModel> {
        Box::new(Self::new(self.config))
    }
}
