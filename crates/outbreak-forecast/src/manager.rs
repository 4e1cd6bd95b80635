//! ForecastManager: model registry, training, forecasting, evaluation.

use std::collections::BTreeMap;

use chrono::Local;
use outbreak_core::config::{ForecastConfig, NetworkModelConfig, NetworkType, OutbreakConfig};
use outbreak_core::config::defaults::DEFAULT_MODEL_WEIGHT;
use outbreak_core::errors::{ForecastError, OutbreakResult};
use outbreak_core::models::{Case, ConnectivityTable, EvaluationRecord, ForecastResult, Region};
use outbreak_core::traits::{FitContext, IForecastModel, PredictContext};
use outbreak_observability::events;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::ensemble;
use crate::evaluation::Backtest;
use crate::models::{DistanceDecayModel, GaussianProcessModel, NetworkPropagationModel};
use crate::registry::ModelRegistry;
use crate::weights::WeightTable;

/// Outcome of [`ForecastManager::train_models`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingReport {
    /// Ids of models fitted successfully, in registration order.
    pub trained: Vec<String>,
    /// `(model id, error message)` for models whose fit failed.
    pub failed: Vec<(String, String)>,
}

impl TrainingReport {
    pub fn all_trained(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Owns the registered models, their ensemble weights and the latest
/// evaluation results.
#[derive(Debug, Default)]
pub struct ForecastManager {
    config: ForecastConfig,
    registry: ModelRegistry,
    weights: WeightTable,
    evaluation: BTreeMap<String, EvaluationRecord>,
}

impl ForecastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ForecastConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// A manager with the distance-decay and Gaussian-process models registered.
    pub fn with_default_models(config: &OutbreakConfig) -> Self {
        let mut manager = Self::with_config(config.forecast.clone());
        manager.add_model(
            Box::new(DistanceDecayModel::new(config.distance_model)),
            Some(crate::models::distance_decay::MODEL_NAME),
            DEFAULT_MODEL_WEIGHT,
        );
        manager.add_model(
            Box::new(GaussianProcessModel::new(config.gaussian_model)),
            Some(crate::models::gaussian_process::MODEL_NAME),
            DEFAULT_MODEL_WEIGHT,
        );
        manager
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Register a model. Without an id one is generated from the model name
    /// and the current time. Returns the id used.
    pub fn add_model(
        &mut self,
        model: Box<dyn IForecastModel>,
        id: Option<&str>,
        weight: f64,
    ) -> String {
        let id = match id {
            Some(id) => id.to_string(),
            None => self.generate_id(model.name()),
        };
        if self.registry.insert(id.clone(), model).is_some() {
            debug!(model_id = %id, "replaced registered model");
        }
        self.weights = self.weights.with_model(id.clone(), weight);
        id
    }

    /// Register a network-propagation model over `connectivity` as `network_<type>`.
    pub fn add_network_model(
        &mut self,
        connectivity: ConnectivityTable,
        network_type: NetworkType,
        config: &NetworkModelConfig,
    ) -> String {
        let model = NetworkPropagationModel::new(NetworkModelConfig {
            network_type,
            ..*config
        })
        .with_connectivity(connectivity);
        let id = model.name().to_string();
        self.add_model(Box::new(model), Some(&id), DEFAULT_MODEL_WEIGHT)
    }

    pub fn remove_model(&mut self, id: &str) -> bool {
        let removed = self.registry.remove(id).is_some();
        if removed {
            self.weights = self.weights.without_model(id);
            self.evaluation.remove(id);
        }
        removed
    }

    pub fn model(&self, id: &str) -> Option<&dyn IForecastModel> {
        self.registry.get(id)
    }

    pub fn model_ids(&self) -> Vec<String> {
        self.registry.ids().map(str::to_string).collect()
    }

    pub fn model_count(&self) -> usize {
        self.registry.len()
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Weights over every registered model, summing to 1.
    pub fn normalized_weights(&self) -> BTreeMap<String, f64> {
        self.weights.normalized_subset(self.registry.ids())
    }

    /// Results of the most recent [`evaluate_models`](Self::evaluate_models) call.
    pub fn evaluation_metrics(&self) -> &BTreeMap<String, EvaluationRecord> {
        &self.evaluation
    }

    /// Fit every registered model in parallel. A failing model is logged and
    /// reported; the others are unaffected.
    pub fn train_models(
        &mut self,
        cases: &[Case],
        regions: &[Region],
        ctx: &FitContext,
    ) -> TrainingReport {
        let span = outbreak_observability::training_span!(self.registry.len(), cases.len());
        let _guard = span.enter();

        let outcomes: Vec<(String, Result<(), String>)> = self
            .registry
            .par_iter_mut()
            .map(|entry| {
                let outcome = entry
                    .model
                    .fit(cases, regions, ctx)
                    .map_err(|e| e.to_string());
                (entry.id.clone(), outcome)
            })
            .collect();

        let mut report = TrainingReport::default();
        for (id, outcome) in outcomes {
            match outcome {
                Ok(()) => {
                    events::model_trained(&id, cases.len());
                    report.trained.push(id);
                }
                Err(reason) => {
                    events::model_failed(&id, "fit", &reason);
                    report.failed.push((id, reason));
                }
            }
        }
        report
    }

    /// Forecast with the configured horizon and ensemble setting.
    pub fn forecast(
        &self,
        cases: &[Case],
        regions: &[Region],
        ctx: &PredictContext,
    ) -> OutbreakResult<ForecastResult> {
        self.generate_forecast(
            cases,
            regions,
            self.config.days_ahead,
            self.config.use_ensemble,
            None,
            ctx,
        )
    }

    /// Forecast `days_ahead` days.
    ///
    /// `selected` restricts the models used; unknown ids are logged and skipped.
    /// Unfitted models and models whose prediction fails are skipped. When
    /// ensembling is off or only one model produced a result, that result is
    /// returned tagged with its model id.
    pub fn generate_forecast(
        &self,
        cases: &[Case],
        regions: &[Region],
        days_ahead: u32,
        use_ensemble: bool,
        selected: Option<&[&str]>,
        ctx: &PredictContext,
    ) -> OutbreakResult<ForecastResult> {
        let span = outbreak_observability::forecast_span!(days_ahead, use_ensemble);
        let _guard = span.enter();

        if self.registry.is_empty() {
            return Err(ForecastError::NoModelsAvailable {
                reason: "no models registered".to_string(),
            }
            .into());
        }

        let candidates: Vec<(&str, &dyn IForecastModel)> = match selected {
            Some(ids) => ids
                .iter()
                .filter_map(|&id| match self.registry.get(id) {
                    Some(model) => Some((id, model)),
                    None => {
                        let err = ForecastError::UnknownModel {
                            model_id: id.to_string(),
                        };
                        warn!(model_id = %id, error = %err, "skipping selected model");
                        None
                    }
                })
                .collect(),
            None => self
                .registry
                .iter()
                .map(|e| (e.id.as_str(), e.model.as_ref()))
                .collect(),
        };

        let fitted: Vec<(&str, &dyn IForecastModel)> = candidates
            .into_iter()
            .filter(|(id, model)| {
                if !model.is_fitted() {
                    warn!(model_id = %id, "model has not been fitted; skipping");
                }
                model.is_fitted()
            })
            .collect();
        if fitted.is_empty() {
            return Err(ForecastError::NoModelsAvailable {
                reason: "no fitted model among those selected".to_string(),
            }
            .into());
        }

        let outcomes: Vec<(&str, OutbreakResult<ForecastResult>)> = fitted
            .par_iter()
            .map(|&(id, model)| (id, model.predict(cases, regions, days_ahead, ctx)))
            .collect();

        let mut predictions: Vec<(String, ForecastResult)> = Vec::with_capacity(outcomes.len());
        for (id, outcome) in outcomes {
            match outcome {
                Ok(result) => predictions.push((id.to_string(), result)),
                Err(e) => events::model_failed(id, "predict", &e.to_string()),
            }
        }

        if predictions.is_empty() {
            return Err(ForecastError::NoModelsAvailable {
                reason: "every selected model failed to predict".to_string(),
            }
            .into());
        }
        if !use_ensemble || predictions.len() == 1 {
            let (id, result) = predictions.swap_remove(0);
            return Ok(result.with_model_id(id));
        }

        let weights = self
            .weights
            .normalized_subset(predictions.iter().map(|(id, _)| id.as_str()));
        debug!(models = predictions.len(), "combining ensemble forecast");
        Ok(ensemble::combine(predictions, weights, regions))
    }

    /// Backtest every registered model and reweight the ensemble from RMSE.
    ///
    /// Registered models keep their fitted state; each window refits a fresh
    /// copy. Fails with `InsufficientData` when no window fits inside the
    /// test period. Models that could not be scored keep their weight.
    pub fn evaluate_models(
        &mut self,
        test_cases: &[Case],
        historical_cases: &[Case],
        regions: &[Region],
        window_days: u32,
        fit_ctx: &FitContext,
        predict_ctx: &PredictContext,
    ) -> OutbreakResult<BTreeMap<String, EvaluationRecord>> {
        let span = outbreak_observability::evaluation_span!(window_days);
        let _guard = span.enter();

        let backtest = Backtest::new(
            test_cases,
            historical_cases,
            regions,
            window_days,
            self.config.active_lookback_days,
            fit_ctx,
            predict_ctx,
        );
        if backtest.windows.is_empty() {
            return Err(ForecastError::InsufficientData {
                reason: format!("no {window_days}-day evaluation window fits the test period"),
            }
            .into());
        }

        let entries: Vec<(&str, &dyn IForecastModel)> = self
            .registry
            .iter()
            .map(|e| (e.id.as_str(), e.model.as_ref()))
            .collect();
        let records: BTreeMap<String, EvaluationRecord> = entries
            .par_iter()
            .filter_map(|&(id, model)| backtest.run(id, model).map(|r| (id.to_string(), r)))
            .collect();

        let rmse: BTreeMap<String, f64> = records
            .iter()
            .map(|(id, r)| (id.clone(), r.rmse))
            .collect();
        self.weights = self.weights.reweighted(&rmse);
        self.evaluation = records.clone();

        let normalized: Vec<(String, f64)> = self.normalized_weights().into_iter().collect();
        events::weights_updated(&normalized);
        info!(
            windows = backtest.windows.len(),
            models = records.len(),
            "evaluation complete"
        );
        Ok(records)
    }

    /// Evaluate with the configured window length.
    pub fn evaluate(
        &mut self,
        test_cases: &[Case],
        historical_cases: &[Case],
        regions: &[Region],
        fit_ctx: &FitContext,
        predict_ctx: &PredictContext,
    ) -> OutbreakResult<BTreeMap<String, EvaluationRecord>> {
        let window = self.config.evaluation_window_days;
        self.evaluate_models(test_cases, historical_cases, regions, window, fit_ctx, predict_ctx)
    }

    fn generate_id(&self, name: &str) -> String {
        let base = format!("{name}_{}", Local::now().format("%Y%m%d_%H%M%S"));
        if !self.registry.contains(&base) {
            return base;
        }
        (2..)
            .map(|n| format!("{base}_{n}"))
            .find(|candidate| !self.registry.contains(candidate))
            .unwrap_or(base)
    }
}
